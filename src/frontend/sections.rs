use super::ExternalLink;
use crate::{
    accordion::Accordion,
    content::{
        ContactMethod, PricingTier, ABOUT_PARAGRAPHS, ABOUT_PROCESS, BRAND, CONTACT_METHODS,
        CORE_STACK, DEFAULT_PORTFOLIO_BLURB, FAQS, FEATURES, HERO_BADGE, HERO_COPY,
        HERO_HIGHLIGHTS, PORTFOLIO, PRICING, PROCESS_STEPS, SERVICES, STATS, TAGLINE, VALUES,
    },
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct SectionHeadingProps {
    id: AttrValue,
    eyebrow: AttrValue,
    title: AttrValue,
    #[prop_or_default]
    lead: Option<AttrValue>,
}

#[function_component(SectionHeading)]
fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <span class="eyebrow">{props.eyebrow.clone()}</span>
            <h2 id={props.id.clone()}>{props.title.clone()}</h2>
            if let Some(lead) = props.lead.clone() {
                <p class="lead">{lead}</p>
            }
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="section hero" aria-labelledby="hero-heading">
            <div class="hero-copy">
                <span class="eyebrow">{HERO_BADGE}</span>
                <h1 id="hero-heading">{"Welcome to "}<span class="gradient-text">{BRAND}</span></h1>
                <p class="hero-tagline">
                    <span class="hero-typing">{TAGLINE}</span>
                    <span class="hero-cursor" aria-hidden="true">{"|"}</span>
                </p>
                <p class="lead">{HERO_COPY}</p>
                <div class="hero-actions">
                    <a class="button button-primary" href="#services">{"Our Services →"}</a>
                    <a class="button button-outline" href="#contact">{"Get a Quote"}</a>
                </div>
                <ul class="hero-highlights">
                    { for HERO_HIGHLIGHTS.iter().map(|item| html! { <li key={*item}>{*item}</li> }) }
                </ul>
                <div class="hero-founder">
                    <img src="/profile-picture.jpg" alt={format!("Founder of {BRAND}")} width="48" height="48" />
                    <div>
                        <p class="founder-name">{BRAND}</p>
                        <p class="muted">{"Founder & Lead Developer"}</p>
                    </div>
                </div>
            </div>
            <div class="hero-preview">
                <p class="eyebrow">{format!("{BRAND} preview")}</p>
                <img src="/images/zCode-1.png" alt={format!("{BRAND} logomark")} loading="lazy" />
            </div>
        </section>
    }
}

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    html! {
        <section class="section features" aria-label="Why work with us">
            <div class="card-grid">
                { for FEATURES.iter().map(|feature| html! {
                    <article key={feature.title} class="card">
                        <h3>{feature.title}</h3>
                        <p class="muted">{feature.description}</p>
                    </article>
                }) }
            </div>
        </section>
    }
}

fn pricing_card(tier: &PricingTier) -> Html {
    let button_style = if tier.highlight {
        "button-primary"
    } else {
        "button-outline"
    };

    html! {
        <article key={tier.name} class={classes!("card", "pricing-card", tier.highlight.then_some("is-highlighted"))}>
            if tier.highlight {
                <span class="badge">{"Most popular"}</span>
            }
            <h3>{tier.name}</h3>
            <p class="muted">{tier.description}</p>
            <p class="price">{tier.price}</p>
            <ul class="check-list">
                { for tier.features.iter().map(|feature| html! { <li key={*feature}>{*feature}</li> }) }
            </ul>
            <a class={classes!("button", button_style)} href={tier.cta_href}>
                {tier.cta_label}
            </a>
        </article>
    }
}

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    html! {
        <section id="pricing" class="section" aria-labelledby="pricing-heading">
            <SectionHeading
                id="pricing-heading"
                eyebrow="Pricing"
                title="Simple, Transparent Pricing"
                lead="Pick the package that fits your scope. Every build includes unlimited revisions while we work."
            />
            <div class="card-grid pricing-grid">
                { for PRICING.iter().map(pricing_card) }
            </div>
        </section>
    }
}

#[function_component(PortfolioSection)]
pub fn portfolio_section() -> Html {
    html! {
        <section id="portfolio" class="section" aria-labelledby="portfolio-heading">
            <SectionHeading
                id="portfolio-heading"
                eyebrow="Portfolio"
                title="Our Portfolio"
                lead="Explore our recent work, from high-converting landing pages to complex web applications."
            />
            <div class="card-grid">
                { for PORTFOLIO.iter().map(|item| html! {
                    <article key={item.title} class="card portfolio-card">
                        <a href={item.href} aria-label={item.title}>
                            <img src={item.image} alt={item.title} loading="lazy" />
                            <span class="badge">{"Live Project"}</span>
                            <h3>{item.title}</h3>
                            <p class="muted">{DEFAULT_PORTFOLIO_BLURB}</p>
                            <ul class="tag-list">
                                { for item.tags.iter().map(|tag| html! { <li key={*tag}>{*tag}</li> }) }
                            </ul>
                        </a>
                    </article>
                }) }
            </div>
            <a class="button button-outline" href="#contact">{"View all projects"}</a>
        </section>
    }
}

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    html! {
        <section id="services" class="section" aria-labelledby="services-heading">
            <SectionHeading
                id="services-heading"
                eyebrow="Services"
                title="Comprehensive Web Solutions"
                lead="From initial concept to launch and beyond, we provide end-to-end services that turn ideas into high-performing digital products."
            />
            <div class="card-grid">
                { for SERVICES.iter().map(|service| html! {
                    <article key={service.title} class="card service-card">
                        <h3>{service.title}</h3>
                        <p class="muted">{service.description}</p>
                        <p class="service-bullet">{service.bullet}</p>
                        <a class="button button-outline button-small" href="#contact">{"Learn more"}</a>
                    </article>
                }) }
            </div>
        </section>
    }
}

#[function_component(ProcessSection)]
pub fn process_section() -> Html {
    html! {
        <section class="section process" aria-labelledby="process-heading">
            <SectionHeading
                id="process-heading"
                eyebrow="Process"
                title="How We Work Together"
                lead="From understanding your needs to delivering a solution that works, we handle every step with transparency."
            />
            <ol class="card-grid process-steps">
                { for PROCESS_STEPS.iter().map(|step| html! {
                    <li key={step.number} class="card">
                        <span class="step-number">{step.number.to_string()}</span>
                        <h3>{step.title}</h3>
                        <p class="muted">{step.description}</p>
                    </li>
                }) }
            </ol>
        </section>
    }
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="about" class="section about" aria-labelledby="about-heading">
            <SectionHeading
                id="about-heading"
                eyebrow="About"
                title="We Build Custom Websites & IT Solutions"
            />
            <div class="about-columns">
                <div>
                    { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    <div class="value-list">
                        { for VALUES.iter().map(|value| html! {
                            <div key={value.title} class="value">
                                <h3>{value.title}</h3>
                                <p class="muted">{value.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
                <div>
                    <dl class="stats">
                        { for STATS.iter().map(|stat| html! {
                            <div key={stat.label} class="stat">
                                <dt class="muted">{stat.label}</dt>
                                <dd>{stat.value}</dd>
                            </div>
                        }) }
                    </dl>
                    <h3>{"Core stack"}</h3>
                    <ul class="tag-list">
                        { for CORE_STACK.iter().map(|tech| html! { <li key={*tech}>{*tech}</li> }) }
                    </ul>
                    <h3>{"Our Process"}</h3>
                    <p class="muted">{ABOUT_PROCESS}</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let accordion = use_state(Accordion::first_open);

    html! {
        <section id="faq" class="section faq" aria-labelledby="faq-heading">
            <SectionHeading
                id="faq-heading"
                eyebrow="FAQ"
                title="Frequently Asked Questions"
                lead="Got questions? Here's what to expect when working with us."
            />
            <div class="faq-list">
                { for FAQS.iter().enumerate().map(|(index, faq)| {
                    let is_open = accordion.is_open(index);
                    let onclick = {
                        let accordion = accordion.clone();
                        Callback::from(move |_: MouseEvent| accordion.set(accordion.toggled(index)))
                    };
                    let answer_id = format!("faq-answer-{index}");

                    html! {
                        <div key={index} class={classes!("faq-item", is_open.then_some("is-open"))}>
                            <button
                                class="faq-question"
                                type="button"
                                aria-expanded={is_open.to_string()}
                                aria-controls={answer_id.clone()}
                                onclick={onclick}
                            >
                                <h3>{faq.question}</h3>
                                <span class="chevron" aria-hidden="true">{"⌄"}</span>
                            </button>
                            if is_open {
                                <div id={answer_id} class="faq-answer">
                                    <p class="muted">{faq.answer}</p>
                                </div>
                            }
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

fn contact_card(method: &ContactMethod) -> Html {
    html! {
        <article key={method.name} class={classes!("card", "contact-card", method.primary.then_some("is-primary"))}>
            <h3>{method.name}</h3>
            <p class="muted">{method.description}</p>
            <ExternalLink
                class={classes!("button", "button-primary")}
                href={method.href}
                new_context={method.opens_new_context()}
            >
                {"Get in touch"}
            </ExternalLink>
        </article>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <section id="contact" class="section contact" aria-labelledby="contact-heading">
            <SectionHeading
                id="contact-heading"
                eyebrow="Contact"
                title="Ready to Start Your Project?"
                lead="Reach out through your preferred channel and we'll get back to you with a proposal and timeline tailored to your needs."
            />
            <div class="card-grid">
                { for CONTACT_METHODS.iter().map(contact_card) }
            </div>
            <p class="muted contact-note">
                {"We typically respond within 12 hours. If your project is urgent, mention it in your message and we'll prioritize your request."}
            </p>
        </section>
    }
}
