use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, sync::LazyLock};

pub static REGISTRY: LazyLock<Vec<Slide>> = LazyLock::new(|| {
    build_registry(
        WORK_INTRO,
        &COMPANIES
            .iter()
            .map(|&(company, role, description)| Item {
                company,
                role,
                description,
                organization: ORGANIZATIONS.contains(&company),
            })
            .collect::<Vec<_>>(),
        ARTICLES,
    )
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Intro,
    Item,
    Article,
}

/// One scrollable unit of the page, identified by its DOM id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub kind: SectionKind,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intro {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub company: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub organization: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Article {
    pub title: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideContent {
    /// The landing banner. Its copy comes from the site config.
    Hero,
    Intro(Intro),
    Item(Item),
    Article(Article),
}

impl SlideContent {
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Hero | Self::Intro(_) => SectionKind::Intro,
            Self::Item(_) => SectionKind::Item,
            Self::Article(_) => SectionKind::Article,
        }
    }

    fn sort_key(&self) -> &'static str {
        match self {
            Self::Hero => "",
            Self::Intro(i) => i.title,
            Self::Item(i) => i.company,
            Self::Article(a) => a.title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub section: Section,
    pub content: SlideContent,
}

/// Zero-padded label shown next to a slide, e.g. `07`.
pub fn label(index: usize) -> String {
    format!("{index:02}")
}

pub fn section_id(index: usize) -> String {
    format!("section-{}", label(index))
}

fn compare_keys(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Lays out the page: hero, work intro, then items and articles sorted by their display name.
pub fn build_registry(intro: Intro, items: &[Item], articles: &[Article]) -> Vec<Slide> {
    let mut rest = items
        .iter()
        .copied()
        .map(SlideContent::Item)
        .chain(articles.iter().copied().map(SlideContent::Article))
        .collect::<Vec<_>>();
    rest.sort_by(|a, b| compare_keys(a.sort_key(), b.sort_key()));

    [SlideContent::Hero, SlideContent::Intro(intro)]
        .into_iter()
        .chain(rest)
        .enumerate()
        .map(|(index, content)| Slide {
            section: Section {
                id: section_id(index),
                kind: content.kind(),
                index,
            },
            content,
        })
        .collect()
}

pub fn sections() -> Vec<Section> {
    REGISTRY.iter().map(|s| s.section.clone()).collect()
}

const WORK_INTRO: Intro = Intro {
    title: "My Work",
    description: "AI-powered applications from architecture to deployment. 15 years shipping production software. 100+ Fortune 500 implementations.",
};

const ORGANIZATIONS: &[&str] = &[
    "Spacebox Digital",
    "CapCheck",
    "Akantro",
    "REQ",
    "BVA",
    "Thermo Fisher Scientific",
    "Home Depot",
    "Accumen",
];

const COMPANIES: &[(&str, &str, &str)] = &[
    (
        "Southtree",
        "Lead Developer",
        "Transformed a traditional media company into a digital powerhouse, architected systems that processed millions of family memories.",
    ),
    (
        "Legacybox",
        "Lead Developer",
        "Engineered scalable solutions handling 100K+ monthly orders for America's largest home movie digitization service.",
    ),
    (
        "Kodak Digitizing",
        "Lead Developer",
        "Modernized a 130-year-old brand's digital presence while preserving its iconic heritage and trust.",
    ),
    (
        "AVID Sportswear",
        "Lead Developer",
        "Accelerated page speeds by 300%, because athletes shouldn't wait for their gear.",
    ),
    (
        "Ghurka",
        "Lead Developer",
        "Hand-crafted digital experiences worthy of their leather bags, with pixel-perfect attention.",
    ),
    (
        "MVMT Watches",
        "Technical Project Lead",
        "Engineered influencer-driven commerce platforms that moved 1.5 million watches without a single retail store.",
    ),
    (
        "Rebecca Minkoff",
        "Technical Project Lead",
        "Migrated a luxury fashion brand from Magento to Shopify Plus.",
    ),
    (
        "Kylie Cosmetics",
        "Technical Project Lead",
        "Handled viral product drops with infrastructure surviving 100K concurrent users in the first minutes.",
    ),
    (
        "National Pen",
        "Technical Project Lead",
        "Personalized mass customization engines processing 50,000 daily promotional product orders.",
    ),
    (
        "Health Net",
        "Technical Project Lead",
        "Prescribed HIPAA-compliant member portals serving 3 million healthcare subscribers.",
    ),
    (
        "Thermo Fisher Scientific",
        "Business & Systems Analyst",
        "Catalyzed a scientific instrument giant's digital transformation with enterprise IAM and systems integration.",
    ),
    (
        "Home Depot",
        "Senior IT Business Systems Analyst",
        "Hammered out SAP implementations while building bridges between 400,000 associates and HQ systems.",
    ),
    (
        "Accumen",
        "UI/UX Engineer & Systems Analyst",
        "Diagnosed healthcare workflow inefficiencies, prescribing agile MVPs that reduced claim processing 60%.",
    ),
    (
        "Spacebox Digital",
        "Chief Technology Officer",
        "Pioneered AI-augmented development workflows, shipping products 3x faster with smaller teams.",
    ),
    (
        "CapCheck",
        "Founder",
        "Building a platform that verifies content like Shazam identifies songs.",
    ),
    (
        "Akantro",
        "Co-Founder",
        "Bootstrapped to profitable exit, scaling from solo consultant to an 8-person team.",
    ),
    (
        "REQ",
        "Head of Development",
        "Led 6 engineers delivering enterprise solutions for brands doing $100M+ in annual revenue.",
    ),
    (
        "BVA",
        "Head of Technical Project Management",
        "Orchestrated 50+ engineers across 8 teams, shipping $10M+ in contracted projects.",
    ),
];

const ARTICLES: &[Article] = &[
    Article {
        title: "On the Path to Mastery",
        link: "https://aaronkantrowitz.hashnode.dev/on-the-path-to-mastery",
    },
    Article {
        title: "Being the Best You That You Can Be",
        link: "https://aaronkantrowitz.hashnode.dev/being-the-best-you-that-you-can-be",
    },
];
