// Static page content. Everything here is authored once and rendered verbatim.

pub const CONTACT_EMAIL: &str = "hello@grownextgen.com";
pub const CONTACT_WHATSAPP: &str = "+1 (555) 987-0000";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Target,
    Video,
    Globe,
    Layers,
    TrendingUp,
    BarChart,
    PieChart,
    Pointer,
    Zap,
    LineChart,
    Rocket,
    Shield,
    Mail,
    Chat,
    Calendar,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Target => "🎯",
            Icon::Video => "🎬",
            Icon::Globe => "🌐",
            Icon::Layers => "🧱",
            Icon::TrendingUp => "📈",
            Icon::BarChart => "📊",
            Icon::PieChart => "🥧",
            Icon::Pointer => "🖱️",
            Icon::Zap => "⚡",
            Icon::LineChart => "📉",
            Icon::Rocket => "🚀",
            Icon::Shield => "🛡️",
            Icon::Mail => "✉️",
            Icon::Chat => "💬",
            Icon::Calendar => "📅",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceOffering {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrustReason {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: Trend,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioCase {
    pub id: &'static str,
    pub title: &'static str,
    pub client: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub results: &'static [ResultMetric],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    /// Star rating, 1 through 5.
    pub rating: u8,
    pub image: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// Highlighted as "Most Popular". Meant for at most one plan.
    pub recommended: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroStat {
    pub value: &'static str,
    pub caption: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: Icon,
    pub href: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevenueBracket {
    #[default]
    UpTo10k,
    From10kTo50k,
    From50kTo250k,
    Over250k,
}

impl RevenueBracket {
    pub const ALL: [RevenueBracket; 4] = [
        RevenueBracket::UpTo10k,
        RevenueBracket::From10kTo50k,
        RevenueBracket::From50kTo250k,
        RevenueBracket::Over250k,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RevenueBracket::UpTo10k => "$0 - $10k",
            RevenueBracket::From10kTo50k => "$10k - $50k",
            RevenueBracket::From50kTo250k => "$50k - $250k",
            RevenueBracket::Over250k => "$250k+",
        }
    }

    /// Value used for the `<option>` element.
    pub fn value(self) -> &'static str {
        match self {
            RevenueBracket::UpTo10k => "0-10k",
            RevenueBracket::From10kTo50k => "10k-50k",
            RevenueBracket::From50kTo250k => "50k-250k",
            RevenueBracket::Over250k => "250k+",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bracket| bracket.value() == value)
    }
}

pub const NAV_SECTIONS: &[&str] = &["About", "Services", "Portfolio", "Process", "Pricing"];

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat { value: "250+", caption: "Campaigns Managed" },
    HeroStat { value: "97%", caption: "Client Retention" },
];

pub const SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        id: "performance",
        title: "Performance Marketing",
        description: "Data-driven campaigns across Meta and Google ecosystems to drive immediate ROI.",
        icon: Icon::Target,
        tags: &["Facebook Ads", "Google Ads", "Lead Gen"],
    },
    ServiceOffering {
        id: "content",
        title: "Content & Creative Strategy",
        description: "High-converting reels, video ads, and copy that stops the scroll.",
        icon: Icon::Video,
        tags: &["Reels", "Video Ads", "Copywriting"],
    },
    ServiceOffering {
        id: "social",
        title: "Social Media Management",
        description: "Strategic planning and engagement growth for high-end lifestyle brands.",
        icon: Icon::Globe,
        tags: &["Planning", "Posting", "Engagement"],
    },
    ServiceOffering {
        id: "funnels",
        title: "Funnels & Websites",
        description: "Optimized landing pages and sales funnels designed for maximum conversion.",
        icon: Icon::Layers,
        tags: &["Landing Pages", "Sales Funnels", "CRO"],
    },
    ServiceOffering {
        id: "ecommerce",
        title: "E-commerce Growth",
        description: "Scale your Shopify store with precision ROAS optimization and scaling tactics.",
        icon: Icon::TrendingUp,
        tags: &["Shopify", "Product Scaling", "ROAS"],
    },
    ServiceOffering {
        id: "analytics",
        title: "Analytics & Tracking",
        description: "Advanced pixel setup and custom performance reporting to see every dollar.",
        icon: Icon::BarChart,
        tags: &["Pixel", "Tracking", "Reports"],
    },
];

pub const WHY_CHOOSE_US: &[TrustReason] = &[
    TrustReason {
        title: "Data-Driven Strategy",
        description: "We don't guess. Every decision is backed by deep market research and historical performance data.",
        icon: Icon::PieChart,
    },
    TrustReason {
        title: "ROI Focused Campaigns",
        description: "Our primary metric is your profit. We optimize for high-quality leads and actual sales, not just clicks.",
        icon: Icon::Pointer,
    },
    TrustReason {
        title: "Creative + Performance Balance",
        description: "Beautiful aesthetics meet aggressive direct response techniques for the perfect brand mix.",
        icon: Icon::Zap,
    },
    TrustReason {
        title: "Transparent Reporting",
        description: "Real-time dashboards and weekly deep-dives so you always know exactly where your budget goes.",
        icon: Icon::LineChart,
    },
    TrustReason {
        title: "Scalable Growth Systems",
        description: "We build infrastructures that don't break when you double your ad spend.",
        icon: Icon::Rocket,
    },
    TrustReason {
        title: "Long-Term Mindset",
        description: "We treat your business like our own, focusing on sustainable scale and brand longevity.",
        icon: Icon::Shield,
    },
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        step: "01",
        title: "Audit & Research",
        description: "We dive deep into your current funnels, ad accounts, and competitor landscape to find hidden opportunities.",
    },
    ProcessStep {
        step: "02",
        title: "Strategy Planning",
        description: "Custom roadmaps designed for your specific KPIs. No cookie-cutter templates.",
    },
    ProcessStep {
        step: "03",
        title: "Creative Production",
        description: "Our in-house team produces high-converting assets (reels, copy, static ads) built to convert.",
    },
    ProcessStep {
        step: "04",
        title: "Campaign Launch",
        description: "Precision setup of tracking and multi-channel launch with aggressive testing phases.",
    },
    ProcessStep {
        step: "05",
        title: "Optimization & Scaling",
        description: "We kill the losers and double down on the winners. Relentless scaling of profitable segments.",
    },
];

pub const PORTFOLIO: &[PortfolioCase] = &[
    PortfolioCase {
        id: "1",
        title: "Beauty Brand Scaling",
        client: "Lumina Skincare",
        category: "E-commerce Growth",
        image: "https://picsum.photos/seed/skincare/800/600",
        results: &[
            ResultMetric { label: "ROAS", value: "6.4x", trend: Trend::Up },
            ResultMetric { label: "Revenue Increase", value: "240%", trend: Trend::Up },
        ],
    },
    PortfolioCase {
        id: "2",
        title: "Fintech Lead Generation",
        client: "NovaPay",
        category: "Performance Marketing",
        image: "https://picsum.photos/seed/fintech/800/600",
        results: &[
            ResultMetric { label: "CPA Reduction", value: "45%", trend: Trend::Down },
            ResultMetric { label: "Monthly Leads", value: "1,200+", trend: Trend::Up },
        ],
    },
    PortfolioCase {
        id: "3",
        title: "SaaS Launch Strategy",
        client: "CloudFlow",
        category: "Funnels & Strategy",
        image: "https://picsum.photos/seed/saas/800/600",
        results: &[
            ResultMetric { label: "Conversion Rate", value: "18%", trend: Trend::Up },
            ResultMetric { label: "User Growth", value: "3x", trend: Trend::Up },
        ],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "1",
        name: "Sarah Jenkins",
        role: "Marketing Director",
        company: "Urban Threads",
        content: "Grow Next Gen transformed our ad strategy. Within 3 months, our ROAS jumped from 2.5x to 5.2x consistently. They are true growth partners.",
        rating: 5,
        image: "https://picsum.photos/seed/woman1/100/100",
    },
    Testimonial {
        id: "2",
        name: "Marcus Chen",
        role: "Founder",
        company: "Peak Performance",
        content: "Their data-driven approach is refreshing. No fluff, just results. The creative production quality is unmatched in this price range.",
        rating: 5,
        image: "https://picsum.photos/seed/man1/100/100",
    },
];

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Starter",
        price: "$2,500",
        description: "Ideal for startups looking to find product-market fit and start scaling.",
        features: &[
            "Single Channel Management",
            "Basic Creative Production",
            "Weekly Reporting",
            "Standard Pixel Setup",
            "Support via Email",
        ],
        recommended: false,
    },
    PricingPlan {
        name: "Growth",
        price: "$5,000",
        description: "Perfect for established brands ready to dominate multiple channels.",
        features: &[
            "Multi-Channel Management",
            "Full Creative Production (Reels/Videos)",
            "Sales Funnel Optimization",
            "Real-time Performance Dashboard",
            "Monthly Strategy Deep-Dive",
            "Priority Support",
        ],
        recommended: true,
    },
    PricingPlan {
        name: "Scale",
        price: "Custom",
        description: "Aggressive scaling for market leaders with high budgets.",
        features: &[
            "Omni-channel Strategy",
            "Dedicated Content Team",
            "Advanced BI Integration",
            "International Expansion Scaling",
            "24/7 Priority Concierge",
            "Custom CRM Automations",
        ],
        recommended: false,
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email Us",
        value: CONTACT_EMAIL,
        icon: Icon::Mail,
        href: Some("mailto:hello@grownextgen.com"),
    },
    ContactChannel {
        label: "WhatsApp",
        value: CONTACT_WHATSAPP,
        icon: Icon::Chat,
        href: None,
    },
    ContactChannel {
        label: "Book a Call",
        value: "View Calendly",
        icon: Icon::Calendar,
        href: None,
    },
];

/// Filled stars for a rating, clamped to the 1..=5 scale.
pub fn filled_stars(rating: u8) -> usize {
    rating.clamp(1, 5) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn at_most_one_plan_is_recommended() {
        let recommended: Vec<_> = PRICING_PLANS.iter().filter(|p| p.recommended).collect();
        assert_eq!(recommended.len(), 1);
        assert_eq!(recommended[0].name, "Growth");
    }

    #[test]
    fn catalog_ids_are_unique() {
        let services: HashSet<_> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(services.len(), SERVICES.len());
        let cases: HashSet<_> = PORTFOLIO.iter().map(|c| c.id).collect();
        assert_eq!(cases.len(), PORTFOLIO.len());
        let quotes: HashSet<_> = TESTIMONIALS.iter().map(|t| t.id).collect();
        assert_eq!(quotes.len(), TESTIMONIALS.len());
    }

    #[test]
    fn testimonial_ratings_are_on_five_star_scale() {
        for t in TESTIMONIALS {
            assert!((1..=5).contains(&t.rating), "{} has rating {}", t.name, t.rating);
        }
        assert_eq!(filled_stars(0), 1);
        assert_eq!(filled_stars(9), 5);
        assert_eq!(filled_stars(4), 4);
    }

    #[test]
    fn revenue_brackets_match_form_options() {
        let labels: Vec<_> = RevenueBracket::ALL.iter().map(|b| b.label()).collect();
        assert_eq!(labels, ["$0 - $10k", "$10k - $50k", "$50k - $250k", "$250k+"]);
        for bracket in RevenueBracket::ALL {
            assert_eq!(RevenueBracket::from_value(bracket.value()), Some(bracket));
        }
        assert_eq!(RevenueBracket::from_value("1M+"), None);
        assert_eq!(RevenueBracket::default(), RevenueBracket::UpTo10k);
    }

    #[test]
    fn every_case_study_reports_results() {
        for case in PORTFOLIO {
            assert!(!case.results.is_empty(), "{} has no results", case.title);
        }
        let down: Vec<_> = PORTFOLIO
            .iter()
            .flat_map(|c| c.results.iter())
            .filter(|r| r.trend == Trend::Down)
            .map(|r| r.label)
            .collect();
        assert_eq!(down, ["CPA Reduction"]);
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        for (i, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.step, format!("{:02}", i + 1));
        }
    }
}
