use super::{dom, ExternalLink};
use crate::{
    content::{BRAND, BUILT_WITH, CONTACT_METHODS, FOOTER_BLURB, SOCIAL_LINKS},
    navigation::NAV_LINKS,
};
use web_sys::MouseEvent;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = use_memo((), |_| dom::current_year());
    let on_back_to_top = Callback::from(|_: MouseEvent| dom::scroll_to_top());
    // Privacy and terms pages do not exist yet.
    let placeholder = Callback::from(|event: MouseEvent| event.prevent_default());

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <a class="brand" href="#home">
                        <span class="brand-mark" aria-hidden="true">{"</>"}</span>
                        <span class="brand-name">{BRAND}</span>
                    </a>
                    <p class="muted">{FOOTER_BLURB}</p>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|social| html! {
                            <ExternalLink key={social.name} class={classes!("social-link")} href={social.href} aria_label={social.name}>
                                {social.name}
                            </ExternalLink>
                        }) }
                    </div>
                </div>

                <nav class="footer-links" aria-label="Footer">
                    <h3>{"Quick Links"}</h3>
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.anchor} class="footer-link" href={link.href()}>{link.label}</a>
                    }) }
                </nav>

                <div class="footer-contact">
                    <h3>{"Get in Touch"}</h3>
                    { for CONTACT_METHODS.iter().map(|method| html! {
                        <ExternalLink
                            key={method.name}
                            class={classes!("footer-link")}
                            href={method.href}
                            new_context={method.opens_new_context()}
                        >
                            {method.name}
                        </ExternalLink>
                    }) }
                </div>

                <div class="footer-stack">
                    <h3>{"Built With"}</h3>
                    <ul class="tag-list">
                        { for BUILT_WITH.iter().map(|tech| html! { <li key={*tech}>{*tech}</li> }) }
                    </ul>
                    <button class="button button-outline" type="button" aria-label="Scroll to top" onclick={on_back_to_top}>
                        {"Back to top ↑"}
                    </button>
                </div>
            </div>

            <div class="footer-bottom">
                <p class="muted">{format!("© {} {BRAND}. All rights reserved.", *year)}</p>
                <div class="footer-legal">
                    <a href="#privacy" onclick={placeholder.clone()}>{"Privacy"}</a>
                    <a href="#terms" onclick={placeholder}>{"Terms"}</a>
                </div>
            </div>
        </footer>
    }
}
