//! Copy and content tables for each landing page variant.

use crate::config::ExternalLinks;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    AssistantLady,
    MissLead,
}

impl Variant {
    /// Licensed `misslead.*` domains get the Miss.Lead brand at `/`.
    pub fn from_hostname(host: &str) -> Self {
        let host = host.trim().to_ascii_lowercase();
        if host.split('.').any(|label| label == "misslead") {
            Variant::MissLead
        } else {
            Variant::AssistantLady
        }
    }

    pub fn content(self) -> &'static LandingContent {
        match self {
            Variant::AssistantLady => &ASSISTANT_LADY,
            Variant::MissLead => &MISS_LEAD,
        }
    }
}

pub struct Brand {
    pub name: &'static str,
    pub logo_lead: &'static str,
    pub logo_accent: &'static str,
    pub badge: &'static str,
    pub hero_image: &'static str,
    pub hero_alt: &'static str,
    pub licensed_domains: &'static str,
}

pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub struct WorkflowStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Differentiator {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PricingTier {
    Starter,
    Professional,
    Enterprise,
}

impl PricingTier {
    pub fn checkout_url(self, links: &ExternalLinks) -> &str {
        match self {
            PricingTier::Starter => &links.starter_checkout,
            PricingTier::Professional => &links.professional_checkout,
            PricingTier::Enterprise => &links.enterprise_checkout,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Price {
    Monthly(&'static str),
    Custom,
}

pub struct PricingPlan {
    pub tier: PricingTier,
    pub name: &'static str,
    pub price: Price,
    pub leads: &'static str,
    pub featured: bool,
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Image-and-pitch block between features and workflow (Miss.Lead).
pub struct Showcase {
    pub title: &'static str,
    pub bottom_line: &'static str,
    pub briefly: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
}

/// Full-width brand image block after the hero (Assistant Lady).
pub struct BrandShowcase {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
}

pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

pub struct LandingContent {
    pub brand: Brand,
    pub brand_showcase: Option<BrandShowcase>,
    pub metrics: &'static [Metric],
    pub features: &'static [Feature],
    pub showcase: Option<Showcase>,
    pub workflow: &'static [WorkflowStep],
    pub differentiators: &'static [Differentiator],
    pub plans: &'static [PricingPlan],
    pub faq: &'static [FaqEntry],
    pub footer: &'static [FooterColumn],
}

const METRICS: &[Metric] = &[
    Metric { value: "24/7", label: "Always Available" },
    Metric { value: "< 1min", label: "Response Time" },
    Metric { value: "100%", label: "Lead Capture" },
    Metric { value: "∞", label: "Follow-up Cycles" },
];

const fn features(qualification_icon: &'static str) -> [Feature; 6] {
    [
        Feature {
            title: "24/7 Call Handling",
            description: "Answers incoming calls at all times, no voicemail and no delays. Immediate professional response to every lead.",
            icon: "☎️",
        },
        Feature {
            title: "Real-time Qualification",
            description: "Asks the right questions to identify serious buyers, sellers, and investors. Saves hours of agent time.",
            icon: qualification_icon,
        },
        Feature {
            title: "Automatic Appointment Booking",
            description: "Schedules viewings, valuations, and consultations directly into your calendar. Zero manual scheduling.",
            icon: "📅",
        },
        Feature {
            title: "Relentless Follow-up",
            description: "Polite, persistent follow-ups ensure no lead falls through the cracks. Professional nurturing at scale.",
            icon: "🔄",
        },
        Feature {
            title: "Outbound Lead Generation",
            description: "Manages large call volumes for new listings, old enquiries, and nurture campaigns automatically.",
            icon: "📞",
        },
        Feature {
            title: "Scalable Cost Reduction",
            description: "Eliminate staffing overhead for lead handling. Scale your agency without hiring more staff.",
            icon: "💰",
        },
    ]
}

const ASSISTANT_LADY_FEATURES: [Feature; 6] = features("🎙️");
const MISS_LEAD_FEATURES: [Feature; 6] = features("🎯");

const fn workflow(answer: &'static str) -> [WorkflowStep; 5] {
    [
        WorkflowStep { step: 1, title: "Detect", description: "Lead arrives (call, form, portal)" },
        WorkflowStep { step: 2, title: "Answer", description: answer },
        WorkflowStep { step: 3, title: "Qualify", description: "Real-time intent & budget check" },
        WorkflowStep { step: 4, title: "Book", description: "Auto-schedule & notify agent" },
        WorkflowStep { step: 5, title: "Follow-up", description: "Persistent nurture until close" },
    ]
}

const ASSISTANT_LADY_WORKFLOW: [WorkflowStep; 5] = workflow("Assistant responds instantly");
const MISS_LEAD_WORKFLOW: [WorkflowStep; 5] = workflow("Miss.Lead responds instantly");

const MISS_LEAD_DIFFERENTIATORS: &[Differentiator] = &[
    Differentiator {
        title: "Commission-Aligned Pricing",
        description: "No subscriptions. No surprises. You succeed, we succeed. Pay only for real results.",
    },
    Differentiator {
        title: "Ultra-Permission First",
        description: "Every interaction follows consent rules. Your brand trust stays intact. Clients feel respected.",
    },
    Differentiator {
        title: "Human Review Ready",
        description: "When confidence drops, humans take over. Always transparent. Always accountable.",
    },
];

const PLANS: &[PricingPlan] = &[
    PricingPlan {
        tier: PricingTier::Starter,
        name: "Starter",
        price: Price::Monthly("$99"),
        leads: "Up to 50 leads/mo",
        featured: false,
    },
    PricingPlan {
        tier: PricingTier::Professional,
        name: "Professional",
        price: Price::Monthly("$299"),
        leads: "Up to 500 leads/mo",
        featured: true,
    },
    PricingPlan {
        tier: PricingTier::Enterprise,
        name: "Enterprise",
        price: Price::Custom,
        leads: "Unlimited leads",
        featured: false,
    },
];

const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Which calls does the assistant pick up?",
        answer: "Every inbound call on the numbers you forward to it, day and night. Portal enquiries and web forms are picked up the same way, so no lead waits for office hours.",
    },
    FaqEntry {
        question: "How are leads qualified?",
        answer: "The assistant asks about intent, timeline and budget in a natural conversation. Serious buyers, sellers and investors are flagged for your agents with the full transcript attached.",
    },
    FaqEntry {
        question: "Can it book appointments into my calendar?",
        answer: "Yes. Viewings, valuations and consultations are scheduled straight into your calendar and the responsible agent is notified right away.",
    },
    FaqEntry {
        question: "What happens when a conversation gets tricky?",
        answer: "When confidence drops the conversation is handed to a human with all context so far. Nothing is promised on your behalf that you have not approved.",
    },
    FaqEntry {
        question: "Is there a contract or setup fee?",
        answer: "No. Plans are billed monthly with no commitment, and you can move between tiers as your lead volume changes.",
    },
    FaqEntry {
        question: "How do I sign in?",
        answer: "Enter your work email at the top of the page and we send you a one-time login link. There is no password to remember.",
    },
];

const FOOTER: &[FooterColumn] = &[
    FooterColumn {
        title: "Product",
        links: &[
            FooterLink { label: "Features", href: "#features" },
            FooterLink { label: "How It Works", href: "#how-it-works" },
            FooterLink { label: "Pricing", href: "#pricing" },
        ],
    },
    FooterColumn {
        title: "Support",
        links: &[
            FooterLink { label: "Documentation", href: "#" },
            FooterLink { label: "Contact", href: "#" },
            FooterLink { label: "FAQ", href: "#faq" },
        ],
    },
    FooterColumn {
        title: "Legal",
        links: &[
            FooterLink { label: "Privacy", href: "#" },
            FooterLink { label: "Terms", href: "#" },
        ],
    },
];

static ASSISTANT_LADY: LandingContent = LandingContent {
    brand: Brand {
        name: "Assistant Lady",
        logo_lead: "Assistant",
        logo_accent: " Lady",
        badge: "🎙️ 24/7 Lead Management",
        hero_image: "/assistant-lady.svg",
        hero_alt: "Assistant Lady AI Assistant",
        licensed_domains: "assistantlady.* | misslead.*",
    },
    brand_showcase: Some(BrandShowcase {
        title: "Miss.Lead - The Original",
        subtitle: "Powered by advanced AI technology and years of real estate expertise",
        image: "/misslead.svg",
        image_alt: "Miss.Lead Brand",
    }),
    metrics: METRICS,
    features: &ASSISTANT_LADY_FEATURES,
    showcase: None,
    workflow: &ASSISTANT_LADY_WORKFLOW,
    differentiators: &[],
    plans: PLANS,
    faq: FAQ,
    footer: FOOTER,
};

static MISS_LEAD: LandingContent = LandingContent {
    brand: Brand {
        name: "Miss.Lead",
        logo_lead: "Miss",
        logo_accent: ".Lead",
        badge: "🎯 24/7 Lead Management",
        hero_image: "/misslead-hero.png",
        hero_alt: "Miss Lead AI Assistant",
        licensed_domains: "misslead.* | assistantlady.*",
    },
    brand_showcase: None,
    metrics: METRICS,
    features: &MISS_LEAD_FEATURES,
    showcase: Some(Showcase {
        title: "Always On. Never Intrusive.",
        bottom_line: "Conversations continue without pressure. Leads feel attended to, not sold to.",
        briefly: "Miss Lead qualifies intent, respects hesitation, and knows when to pause. Clean handoff with full context for your agents.",
        image: "/misslead-quality.png",
        image_alt: "Miss Lead Professional Quality",
    }),
    workflow: &MISS_LEAD_WORKFLOW,
    differentiators: MISS_LEAD_DIFFERENTIATORS,
    plans: PLANS,
    faq: FAQ,
    footer: FOOTER,
};

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANTS: [Variant; 2] = [Variant::AssistantLady, Variant::MissLead];

    #[test]
    fn test_from_hostname() {
        assert_eq!(Variant::from_hostname("misslead.ai"), Variant::MissLead);
        assert_eq!(Variant::from_hostname("www.MissLead.com"), Variant::MissLead);
        assert_eq!(Variant::from_hostname("assistantlady.ai"), Variant::AssistantLady);
        assert_eq!(Variant::from_hostname("localhost"), Variant::AssistantLady);
        assert_eq!(Variant::from_hostname("notmisslead.ai"), Variant::AssistantLady);
    }

    #[test]
    fn test_each_variant_has_one_featured_plan_per_tier() {
        for variant in VARIANTS {
            let plans = variant.content().plans;
            let tiers: Vec<PricingTier> = plans.iter().map(|plan| plan.tier).collect();
            assert_eq!(
                tiers,
                vec![PricingTier::Starter, PricingTier::Professional, PricingTier::Enterprise]
            );
            assert_eq!(plans.iter().filter(|plan| plan.featured).count(), 1);
        }
    }

    #[test]
    fn test_only_enterprise_is_custom_priced() {
        for plan in Variant::MissLead.content().plans {
            assert_eq!(plan.price == Price::Custom, plan.tier == PricingTier::Enterprise);
        }
    }

    #[test]
    fn test_workflow_steps_are_numbered_in_order() {
        for variant in VARIANTS {
            let steps: Vec<u8> = variant.content().workflow.iter().map(|s| s.step).collect();
            assert_eq!(steps, vec![1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_variants_differ_where_the_pages_differ() {
        let lady = Variant::AssistantLady.content();
        let lead = Variant::MissLead.content();
        assert!(lady.brand_showcase.is_some() && lady.showcase.is_none());
        assert!(lead.showcase.is_some() && lead.brand_showcase.is_none());
        assert!(lady.differentiators.is_empty());
        assert_eq!(lead.differentiators.len(), 3);
        assert_eq!(lady.features.len(), 6);
        assert_ne!(lady.features[1].icon, lead.features[1].icon);
    }

    #[test]
    fn test_checkout_url_follows_tier() {
        let links = ExternalLinks {
            starter_checkout: "https://pay.example/s".to_string(),
            professional_checkout: "https://pay.example/p".to_string(),
            enterprise_checkout: "https://pay.example/e".to_string(),
            schedule_demo: "https://cal.example/demo".to_string(),
        };
        assert_eq!(PricingTier::Starter.checkout_url(&links), "https://pay.example/s");
        assert_eq!(PricingTier::Professional.checkout_url(&links), "https://pay.example/p");
        assert_eq!(PricingTier::Enterprise.checkout_url(&links), "https://pay.example/e");
    }

    #[test]
    fn test_footer_links_to_sections() {
        let hrefs: Vec<&str> = Variant::AssistantLady
            .content()
            .footer
            .iter()
            .flat_map(|column| column.links.iter().map(|link| link.href))
            .collect();
        for anchor in ["#features", "#how-it-works", "#pricing", "#faq"] {
            assert!(hrefs.contains(&anchor), "missing {anchor}");
        }
    }
}
