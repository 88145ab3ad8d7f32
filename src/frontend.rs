mod dom;
mod footer;
mod header;
mod sections;

use footer::Footer;
use header::Header;
use log::Level;
use sections::{
    AboutSection, ContactSection, FaqSection, FeaturesSection, Hero, PortfolioSection,
    PricingSection, ProcessSection, ServicesSection,
};
use web_sys::window;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    #[prop_or_default]
    class: Classes,
    #[prop_or(true)]
    new_context: bool,
    #[prop_or_default]
    aria_label: Option<AttrValue>,
    #[prop_or_default]
    children: Html,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={props.class.clone()}
            href={props.href.clone()}
            target={props.new_context.then_some("_blank")}
            rel={props.new_context.then_some("noreferrer")}
            aria-label={props.aria_label.clone()}
        >
            {props.children.clone()}
            if props.new_context {
                <>
                    <span class="external-mark" aria-hidden="true">{"↗"}</span>
                    <span class="sr-only">{" (opens in a new tab)"}</span>
                </>
            }
        </a>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <a class="skip-link" href="#home">{"Skip to main content"}</a>
            <div class="page-shell">
                <Header />
                <main id="content">
                    <Hero />
                    <FeaturesSection />
                    <PricingSection />
                    <PortfolioSection />
                    <ServicesSection />
                    <ProcessSection />
                    <AboutSection />
                    <FaqSection />
                    <ContactSection />
                </main>
                <Footer />
            </div>
        </>
    }
}

fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {err}").into());
    }

    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    else {
        log::error!("missing #app mount point");
        return;
    };

    log::info!("rendering site");
    yew::Renderer::<App>::with_root(root).render();
}
