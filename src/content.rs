//! Copy and link targets for the one-page site.

pub const BRAND: &str = "Zcode";
pub const TAGLINE: &str = "Web Development Agency";
pub const HERO_BADGE: &str = "Premium Web Development Services";
pub const HERO_COPY: &str = "We build exceptional digital experiences with modern technologies. From responsive marketing sites to complex web applications, we bring your vision to life with clarity and performance.";
pub const HERO_HIGHLIGHTS: [&str; 3] = ["Modern Technologies", "Fast Delivery", "Quality Guaranteed"];
pub const FOOTER_BLURB: &str =
    "Modern web development agency creating exceptional digital experiences that drive results.";

pub const EMAIL_HREF: &str = "mailto:hello@example.com";
pub const TELEGRAM_HREF: &str = "https://t.me/yourhandle";
pub const DISCORD_HREF: &str = "https://discord.com/users/yourid";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Card; 3] = [
    Card {
        title: "Custom Solutions",
        description: "Every project is tailored to your specific needs. No cookie-cutter templates, just solutions that fit your business perfectly.",
    },
    Card {
        title: "Fast Delivery",
        description: "We build fast without cutting corners. Get your website or IT solution live quickly, so you can start seeing results sooner.",
    },
    Card {
        title: "Performance Focused",
        description: "We build for speed, scalability, and results. Your website will load fast, rank well, and convert visitors into customers.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub cta_label: &'static str,
    pub cta_href: &'static str,
    pub highlight: bool,
}

pub const PRICING: [PricingTier; 3] = [
    PricingTier {
        name: "Basic",
        description: "Perfect for small business websites and personal projects.",
        price: "$120",
        features: &[
            "Responsive design",
            "Up to 3 pages",
            "Basic SEO setup",
            "Unlimited revisions during build",
            "1-day delivery for simple scopes",
        ],
        cta_label: "Start Basic",
        cta_href: "#contact",
        highlight: false,
    },
    PricingTier {
        name: "Standard",
        description: "Ideal for growing businesses and small e-commerce sites.",
        price: "$450+",
        features: &[
            "Everything in Basic",
            "Up to 5 pages",
            "E-commerce or booking integration",
            "Custom animations and interactions",
            "Simple CMS for content edits",
            "Basic server or hosting setup",
            "Unlimited revisions during build",
            "~3-day delivery for typical projects",
        ],
        cta_label: "Choose Standard",
        cta_href: "#contact",
        highlight: true,
    },
    PricingTier {
        name: "Premium",
        description: "Advanced solutions for complex or custom builds.",
        price: "$700+",
        features: &[
            "Everything in Standard",
            "8+ pages or multi-step flows",
            "Custom backend or APIs",
            "Performance and Core Web Vitals tuning",
            "Advanced server and deployment setup",
            "Ongoing support options available",
            "Unlimited revisions during build",
            "5–7 day delivery for full builds",
        ],
        cta_label: "Plan Premium Build",
        cta_href: "#contact",
        highlight: false,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub image: &'static str,
    pub href: &'static str,
    pub tags: &'static [&'static str],
}

pub const DEFAULT_PORTFOLIO_BLURB: &str = "Designed, built, and optimized by Zcode.";

pub const PORTFOLIO: [PortfolioItem; 3] = [
    PortfolioItem {
        title: "Project One",
        image: "/images/one.jpg",
        href: "#portfolio",
        tags: &["Next.js", "Tailwind", "TypeScript"],
    },
    PortfolioItem {
        title: "Project Two",
        image: "/images/two.jpg",
        href: "#portfolio",
        tags: &["Next.js", "Tailwind", "TypeScript"],
    },
    PortfolioItem {
        title: "Project Three",
        image: "/images/three.jpg",
        href: "#portfolio",
        tags: &["Next.js", "Tailwind", "TypeScript"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub bullet: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        title: "Web Design",
        description: "Minimal, user-first design system.",
        bullet: "UI/UX Design",
    },
    Service {
        title: "Web Development",
        description: "Fast, accessible builds.",
        bullet: "Full-Stack Development",
    },
    Service {
        title: "Performance & SEO",
        description: "SEO, performance, and analytics.",
        bullet: "Performance Tuning",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        number: 1,
        title: "Discovery & Planning",
        description: "We start by understanding your business, goals, and technical requirements. This ensures we build exactly what you need, not what we think you want.",
    },
    ProcessStep {
        number: 2,
        title: "Design & Development",
        description: "We create custom designs and build your website or IT solution using modern technologies. Every line of code is written with performance and scalability in mind.",
    },
    ProcessStep {
        number: 3,
        title: "Testing & Launch",
        description: "Before launch, we test functionality, performance, security, and user experience. Then we deploy your solution and make sure it works.",
    },
    ProcessStep {
        number: 4,
        title: "Support & Optimization",
        description: "After launch, we monitor performance, fix any issues, and optimize as needed.",
    },
];

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "Zcode is an IT agency that builds custom websites and technical solutions. We work with businesses that need more than a template. They need a solution built specifically for them.",
    "Whether you need a simple website, a complex web application, or custom IT infrastructure, we deliver solutions that work. Fast, reliable, and built to scale with your business.",
];

pub const ABOUT_PROCESS: &str = "We follow a streamlined, collaborative process that keeps you informed every step of the way. From initial discovery to final deployment, you'll always know what's happening and what's next.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat {
        label: "Projects delivered",
        value: "50+",
    },
    Stat {
        label: "Average response",
        value: "< 12h",
    },
    Stat {
        label: "Client satisfaction",
        value: "98%",
    },
];

pub const VALUES: [Card; 3] = [
    Card {
        title: "Quality First",
        description: "We write clean code, build fast websites, and create solutions that actually work.",
    },
    Card {
        title: "Client Focused",
        description: "Your success is our priority. We communicate clearly, deliver on time, and build exactly what you need.",
    },
    Card {
        title: "Modern Tech",
        description: "We use current tools and proven practices to build solutions that stay fast, secure, and maintainable for years.",
    },
];

pub const CORE_STACK: [&str; 12] = [
    "Next.js",
    "React",
    "TypeScript",
    "Java",
    "Spring",
    "C# .NET",
    "Node.js",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Tailwind CSS",
    "shadcn/ui",
];

pub const BUILT_WITH: [&str; 4] = ["Rust", "Yew", "WebAssembly", "axum"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 6] = [
    Faq {
        question: "What services do you offer?",
        answer: "We specialize in custom website development, web applications, and IT solutions. This includes frontend and backend development, database design, API integrations, performance optimization, and ongoing technical support.",
    },
    Faq {
        question: "Do you work with small businesses?",
        answer: "Absolutely. We work with businesses of all sizes, from startups launching their first website to established companies needing complex IT solutions.",
    },
    Faq {
        question: "How long does it take to build a website?",
        answer: "Timelines depend on project complexity. Simple websites take 7-10 business days, while more complex projects with custom features typically take 14-21 days.",
    },
    Faq {
        question: "What technologies do you use?",
        answer: "We build with modern, proven technologies and industry-standard tools, so your solution is fast, secure, and maintainable for years to come.",
    },
    Faq {
        question: "Do you provide support after launch?",
        answer: "Yes. All packages include post-launch support. We fix issues, make updates, and keep everything working.",
    },
    Faq {
        question: "Can you integrate with existing systems?",
        answer: "Yes. We integrate with payment processors, CRM systems, databases, APIs, and other third-party services, working with your existing infrastructure.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactMethod {
    pub name: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub primary: bool,
}

impl ContactMethod {
    /// Mail links open in the current context; everything else opens a new one.
    pub fn opens_new_context(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

pub const CONTACT_METHODS: [ContactMethod; 3] = [
    ContactMethod {
        name: "Telegram",
        description: "Quick async communication",
        href: TELEGRAM_HREF,
        primary: false,
    },
    ContactMethod {
        name: "Discord",
        description: "Community & support",
        href: DISCORD_HREF,
        primary: false,
    },
    ContactMethod {
        name: "Email",
        description: "Formal inquiries",
        href: EMAIL_HREF,
        primary: true,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "Twitter",
        href: "https://twitter.com/zcode",
    },
    SocialLink {
        name: "LinkedIn",
        href: "https://www.linkedin.com/company/zcode",
    },
    SocialLink {
        name: "GitHub",
        href: "https://github.com/zcode",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NAV_LINKS;

    fn is_known_target(href: &str) -> bool {
        match href.strip_prefix('#') {
            Some(anchor) => NAV_LINKS.iter().any(|link| link.anchor == anchor),
            None => href.starts_with("https://") || href.starts_with("mailto:"),
        }
    }

    #[test]
    fn exactly_one_pricing_tier_is_highlighted() {
        assert_eq!(PRICING.iter().filter(|tier| tier.highlight).count(), 1);
    }

    #[test]
    fn every_link_target_resolves() {
        let hrefs = PRICING
            .iter()
            .map(|tier| tier.cta_href)
            .chain(PORTFOLIO.iter().map(|item| item.href))
            .chain(CONTACT_METHODS.iter().map(|method| method.href))
            .chain(SOCIAL_LINKS.iter().map(|link| link.href));

        for href in hrefs {
            assert!(is_known_target(href), "unresolved link target {href}");
        }
    }

    #[test]
    fn only_mail_link_stays_in_current_context() {
        let same_context: Vec<_> = CONTACT_METHODS
            .iter()
            .filter(|method| !method.opens_new_context())
            .map(|method| method.name)
            .collect();

        assert_eq!(same_context, vec!["Email"]);
        assert!(CONTACT_METHODS[2].href.starts_with("mailto:"));
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        let numbers: Vec<u8> = PROCESS_STEPS.iter().map(|step| step.number).collect();

        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }
}
