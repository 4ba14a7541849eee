//! Static copy of the landing page.

use crate::palette::{Gradient, Tone};

pub const BRAND: &str = "Animated";
pub const TAGLINE: &str = "Creating stunning animations and interactive experiences for the modern web.";

pub const HERO_BADGE: &str = "✨ Introducing our new platform";
pub const HERO_TITLE: [&str; 2] = ["Create stunning", "animated experiences"];
pub const HERO_BODY: &str = "Build beautiful, interactive websites with smooth animations and creative transitions that captivate your audience.";
pub const HERO_TRUST: &str = "Trusted by 1000+ companies worldwide";
pub const HERO_SCROLL_HINT: &str = "Scroll to explore";

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub gradient: Gradient,
}

pub const FEATURES_KICKER: &str = "POWERFUL FEATURES";
pub const FEATURES_TITLE: &str = "Everything you need to create amazing animations";
pub const FEATURES_BODY: &str = "Our platform provides all the tools you need to create stunning animations and transitions that will captivate your audience and elevate your web presence.";

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Responsive Design",
        description: "Fully responsive layouts that work on any device, from mobile to desktop.",
        icon: "▦",
        gradient: Gradient::new(Tone::Violet, Tone::Purple),
    },
    Feature {
        title: "Modern Animations",
        description: "Smooth, performant animations that enhance the user experience.",
        icon: "✦",
        gradient: Gradient::new(Tone::Blue, Tone::Cyan),
    },
    Feature {
        title: "SEO Optimized",
        description: "Built with best practices for search engine optimization.",
        icon: "⌕",
        gradient: Gradient::new(Tone::Emerald, Tone::Green),
    },
    Feature {
        title: "Fast Performance",
        description: "Optimized for speed and performance to keep users engaged.",
        icon: "ϟ",
        gradient: Gradient::new(Tone::Amber, Tone::Yellow),
    },
];

pub const PARALLAX_TITLE: &str = "Create stunning animations with ease";
pub const PARALLAX_BODY: &str = "Our platform makes it simple to add beautiful animations and transitions to your website, no coding required.";

pub const ABOUT_KICKER: &str = "ABOUT US";
pub const ABOUT_TITLE: &str = "We create animations that bring your ideas to life";
pub const ABOUT_BODY: &str = "Our team of expert designers and developers are passionate about creating stunning animations and interactive experiences that captivate audiences and drive engagement.";
pub const ABOUT_BADGE: (&str, &str) = ("10+ Years", "Of Experience");
pub const ABOUT_BADGE_BODY: &str = "We've been creating stunning animations and interactive experiences for over a decade.";
pub const ABOUT_POINTS: [&str; 4] = [
    "Experienced team of designers and developers",
    "Custom solutions tailored to your needs",
    "Cutting-edge animation techniques",
    "Responsive and accessible designs",
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: "500+", label: "Happy Clients" },
    Stat { value: "1,000+", label: "Projects Completed" },
    Stat { value: "50+", label: "Team Members" },
    Stat { value: "10+", label: "Years of Experience" },
];

pub const CONTACT_KICKER: &str = "CONTACT US";
pub const CONTACT_TITLE: &str = "Let's bring your ideas to life";
pub const CONTACT_BODY: &str = "Ready to create stunning animations for your next project? Get in touch with our team today to discuss how we can help bring your vision to life.";
pub const CONTACT_FORM_TITLE: &str = "Send us a message";
pub const CONTACT_DETAILS: [(&str, &str); 3] = [
    ("Email", "hello@animated.com"),
    ("Phone", "+1 (555) 123-4567"),
    ("Address", "123 Animation St, Creative City, CA 94103"),
];

pub const CTA_TITLE: &str = "Ready to create amazing animations?";
pub const CTA_BODY: &str = "Join thousands of satisfied customers who have transformed their websites with our animation platform. Get started today and see the difference.";

pub const SOCIALS: [&str; 4] = ["twitter", "facebook", "instagram", "github"];
pub const FOOTER_COLUMNS: [(&str, [&str; 4]); 3] = [
    ("Company", ["About", "Careers", "Blog", "Press"]),
    ("Resources", ["Documentation", "Tutorials", "Examples", "Pricing"]),
    ("Legal", ["Terms", "Privacy", "Cookies", "Licenses"]),
];
pub const FOOTER_LEGAL: [&str; 3] = ["Terms", "Privacy", "Cookies"];
