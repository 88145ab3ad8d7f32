use super::dom::{self, BodyScrollLock, DomViewport, WindowListener};
use crate::{
    content::BRAND,
    menu::{lock_while_open, MenuMsg, MenuVisibility},
    navigation::{NavigationState, ScrollEffect, ScrollEvent, NAV_LINKS},
};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
struct NavSnapshot {
    active: &'static str,
    scrolled: bool,
}

impl NavSnapshot {
    fn of(nav: &NavigationState) -> Self {
        Self {
            active: nav.active(),
            scrolled: nav.scroll().is_past_threshold,
        }
    }
}

#[derive(Clone, Copy, Default, PartialEq)]
struct MenuModel(MenuVisibility);

impl Reducible for MenuModel {
    type Action = MenuMsg;

    fn reduce(self: Rc<Self>, msg: MenuMsg) -> Rc<Self> {
        let mut next = self.0;
        if next.dispatch(msg) {
            Rc::new(Self(next))
        } else {
            self
        }
    }
}

fn finish_frame(nav: &RefCell<NavigationState>, publish: &Callback<NavSnapshot>) {
    let snapshot = {
        let mut nav = nav.borrow_mut();
        match nav.dispatch(ScrollEvent::FrameReady, &DomViewport) {
            ScrollEffect::Refreshed { changed: true } => Some(NavSnapshot::of(&nav)),
            _ => None,
        }
    };
    if let Some(snapshot) = snapshot {
        publish.emit(snapshot);
    }
}

/// Scroll listener plus the animation-frame callback it schedules.
struct ScrollSubscription {
    _listener: WindowListener,
    _on_frame: Rc<Closure<dyn FnMut()>>,
    frame_id: Rc<Cell<Option<i32>>>,
}

impl ScrollSubscription {
    fn attach(nav: Rc<RefCell<NavigationState>>, publish: Callback<NavSnapshot>) -> Option<Self> {
        let frame_id = Rc::new(Cell::new(None));

        let on_frame = {
            let nav = nav.clone();
            let publish = publish.clone();
            let frame_id = frame_id.clone();
            Rc::new(Closure::<dyn FnMut()>::new(move || {
                frame_id.set(None);
                finish_frame(&nav, &publish);
            }))
        };

        let listener = {
            let on_frame = on_frame.clone();
            let frame_id = frame_id.clone();
            WindowListener::new("scroll", true, move |_| {
                let effect = nav.borrow_mut().dispatch(ScrollEvent::Notified, &DomViewport);
                if effect != ScrollEffect::ScheduleFrame {
                    return;
                }

                let scheduled = window().and_then(|w| {
                    w.request_animation_frame((*on_frame).as_ref().unchecked_ref())
                        .ok()
                });
                match scheduled {
                    Some(id) => frame_id.set(Some(id)),
                    None => finish_frame(&nav, &publish),
                }
            })?
        };

        Some(Self {
            _listener: listener,
            _on_frame: on_frame,
            frame_id,
        })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let (Some(id), Some(win)) = (self.frame_id.take(), window()) {
            let _ = win.cancel_animation_frame(id);
        }
    }
}

#[derive(Properties, PartialEq)]
struct NavItemProps {
    href: AttrValue,
    label: AttrValue,
    active: bool,
    variant: &'static str,
    onclick: Callback<MouseEvent>,
}

#[function_component(NavItem)]
fn nav_item(props: &NavItemProps) -> Html {
    html! {
        <a
            class={classes!(props.variant, props.active.then_some("is-active"))}
            href={props.href.clone()}
            aria-current={props.active.then_some("page")}
            onclick={props.onclick.clone()}
        >
            <span>{props.label.clone()}</span>
        </a>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let nav = use_mut_ref(NavigationState::for_site);
    let snapshot = use_state({
        let nav = nav.clone();
        move || NavSnapshot::of(&nav.borrow())
    });
    let menu = use_reducer(MenuModel::default);
    let theme = use_state(|| dom::theme_store().initial_theme());

    {
        let current = *theme;
        use_effect_with((), move |_| {
            dom::theme_store().apply(current);
            || ()
        });
    }

    {
        let nav = nav.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let publish = Callback::from(move |next: NavSnapshot| snapshot.set(next));
            let initial_changed = nav.borrow_mut().refresh(&DomViewport);
            if initial_changed {
                publish.emit(NavSnapshot::of(&nav.borrow()));
            }
            log::info!("navigation mounted with #{} active", nav.borrow().active());

            let subscription = ScrollSubscription::attach(nav, publish);
            move || drop(subscription)
        });
    }

    let open = menu.0.is_open();

    use_effect_with(open, |open| {
        let guard = lock_while_open(*open, BodyScrollLock);
        move || drop(guard)
    });

    {
        let menu = menu.clone();
        use_effect_with(open, move |open| {
            let listener = open
                .then(|| {
                    WindowListener::new("keydown", false, move |event| {
                        let is_escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .is_some_and(|key| key.key() == "Escape");
                        if is_escape {
                            menu.dispatch(MenuMsg::EscapePressed);
                        }
                    })
                })
                .flatten();
            move || drop(listener)
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.set(dom::theme_store().toggle(*theme)))
    };

    let send = |msg: MenuMsg| {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(msg))
    };

    let on_panel_click = {
        let menu = menu.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            menu.dispatch(MenuMsg::PanelClicked);
        })
    };

    let nav_items = |variant: &'static str| -> Html {
        NAV_LINKS
            .iter()
            .map(|link| {
                html! {
                    <NavItem
                        key={link.anchor}
                        href={link.href()}
                        label={link.label}
                        active={snapshot.active == link.anchor}
                        variant={variant}
                        onclick={send(MenuMsg::LinkFollowed)}
                    />
                }
            })
            .collect()
    };

    html! {
        <header class={classes!("site-header", snapshot.scrolled.then_some("scrolled"))}>
            <div class="header-bar">
                <a class="brand" href="#home" onclick={send(MenuMsg::LinkFollowed)}>
                    <span class="brand-mark" aria-hidden="true">{"</>"}</span>
                    <span class="brand-name">{BRAND}</span>
                </a>

                <nav class="desktop-nav" aria-label="Primary">
                    {nav_items("nav-link")}
                </nav>

                <div class="header-actions">
                    <button
                        class="theme-toggle"
                        type="button"
                        aria-label={(*theme).toggle_label()}
                        aria-pressed={(*theme).pressed().to_string()}
                        onclick={on_toggle_theme}
                    >
                        <span aria-hidden="true">{(*theme).icon()}</span>
                    </button>
                    <button
                        class="menu-button"
                        type="button"
                        aria-label={menu.0.toggle_label()}
                        aria-expanded={open.to_string()}
                        aria-controls="mobile-menu"
                        onclick={send(MenuMsg::Toggle)}
                    >
                        <span aria-hidden="true">{if open { "✕" } else { "☰" }}</span>
                    </button>
                </div>
            </div>

            if open {
                <>
                <div class="menu-backdrop" onclick={send(MenuMsg::BackdropClicked)}></div>
                <nav id="mobile-menu" class="menu-panel" aria-label="Mobile" onclick={on_panel_click}>
                    <div class="menu-panel-header">
                        <span class="menu-panel-title">{"Menu"}</span>
                        <button
                            class="menu-close"
                            type="button"
                            aria-label="Close menu"
                            onclick={send(MenuMsg::Close)}
                        >
                            <span aria-hidden="true">{"✕"}</span>
                        </button>
                    </div>
                    <div class="menu-panel-links">
                        {nav_items("menu-link")}
                    </div>
                    <div class="menu-panel-footer">
                        <p class="muted">{"Ready to start your project?"}</p>
                        <a class="menu-cta" href="#contact" onclick={send(MenuMsg::LinkFollowed)}>
                            {"Get in touch →"}
                        </a>
                    </div>
                </nav>
                </>
            }
        </header>
    }
}
