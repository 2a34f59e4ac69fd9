//! The Home view: fixed copy, fixed order.

use crate::content::links::{EMAIL_HREF, LINKEDIN_HREF};
use crate::render::markup::{escape, link, list, metric, pill, pills};

struct Capability {
    title: &'static str,
    summary: &'static str,
    example: &'static str,
}

struct Project {
    tag: &'static str,
    title: &'static str,
    summary: &'static str,
}

const HERO_PILLS: &[&str] = &["PMP", "SAP · Cloud", "AI-enabled delivery"];
const HEADLINE: &str = "I help teams ship reliably — at scale.";
const INTRO: &str = "Senior Technical Program Manager with 12+ years building and running delivery systems for product platforms, cloud infrastructure, and AI-enabled execution.";
const INTRO_DETAIL: &str = "I work at the intersection of engineering execution, platform reliability, and business outcomes—bringing a product mindset to how teams plan, build, and ship.";

const METRICS: &[(&str, &str)] = &[
    ("12+", "Years Experience"),
    ("$5M+", "Program Budgets"),
    ("99.95%", "Platform uptime"),
    ("20", "Sev-1 launches"),
];

const CAPABILITIES: &[Capability] = &[
    Capability {
        title: "Project planning & sequencing",
        summary: "Structure integrated plans, validate sequencing logic, and surface hidden dependencies across SAP, cloud, and data workstreams.",
        example: "Example: Sanity-check a multi-release plan by validating dependencies, surfacing compression risk, and proposing alternative phasing.",
    },
    Capability {
        title: "Workload & resource balancing",
        summary: "Analyze capacity, role allocation, and competing priorities to reduce over-commitment and protect critical paths.",
        example: "Example: Review release commitments to flag bottlenecks and rebalance work while keeping delivery dates stable.",
    },
    Capability {
        title: "Budget oversight & forecast clarity",
        summary: "Compare planned vs. actuals, summarize burn trends, and highlight variance drivers early for corrective action.",
        example: "Example: Generate a monthly forecast summary that identifies overrun risk and options (scope, vendors, sequencing).",
    },
    Capability {
        title: "Release calendar & readiness",
        summary: "Rationalize multi-team release calendars and validate alignment with freeze windows, approvals, and readiness criteria.",
        example: "Example: Consolidate SAP + integration release plans to detect collisions and prevent last-minute change risk.",
    },
    Capability {
        title: "RAID synthesis & trend analysis",
        summary: "Keep RAID logs current, cluster related risks, and elevate systemic themes into executive-level narratives.",
        example: "Example: Identify recurring integration risk patterns and propose mitigations with traceability to source evidence.",
    },
    Capability {
        title: "Exec-ready communication",
        summary: "Convert detailed delivery inputs into concise updates that drive decisions, not meetings.",
        example: "Example: Produce a 1-page summary with status, decisions needed, financial implications, and next milestones.",
    },
];

const PULL_QUOTE: &str = "“Great delivery isn’t about moving faster — it’s about removing friction so teams can ship with confidence.”";

const PRINCIPLES: &[&str] = &[
    "Start with customer impact, then design the delivery system.",
    "Prefer small, reversible decisions over rigid long-term plans.",
    "Treat reliability and operational clarity as product features.",
    "Use AI to reduce cognitive load — not replace accountability.",
];

const PROJECTS: &[Project] = &[
    Project {
        tag: "Manufacturing FinOps",
        title: "SAP IS-U utilities billing exploration",
        summary: "Designed an approach to allocate plant utility consumption (water/steam/electricity) to company codes for accurate financial tracking and chargebacks.",
    },
    Project {
        tag: "Platform Reliability",
        title: "Clean Core integration program",
        summary: "Reduced production incidents by 25% by decoupling SAP S/4HANA from AWS-hosted services using API-first integration patterns (CPI) and clean-core standards.",
    },
];

mod study {
    pub const TAG: &str = "Shipping at scale";
    pub const STACK: &str = "S/4HANA · AWS · Integration";
    pub const TITLE: &str = "Decoupling core finance from downstream apps to reduce change risk";
    pub const PROBLEM: &str = "Frequent downstream changes and tight release windows increased incident risk and slowed delivery across the platform.";
    pub const CONSTRAINTS: &[&str] = &[
        "Regulated environment with formal change control",
        "Multiple vendor teams and legacy integrations",
        "Production stability and auditability requirements",
    ];
    pub const DECISION: &str = "Implemented API-first integration patterns and SAP CPI-based mediation, enforcing clean-core standards and reducing point-to-point coupling.";
    pub const OUTCOME: &[&str] = &[
        "Reduced integration-related production incidents by 25%",
        "Improved release coordination and lowered last-minute change risk",
        "Increased predictability through clearer contracts and dependency boundaries",
    ];
    pub const CLOSING_PILLS: &[&str] = &[
        "Guardrails over gates",
        "Small, reversible changes",
        "Reliability as a feature",
    ];
}

const SKILLS: &str = "SAP S/4HANA, SAP BTP, SAP Integration Suite (CPI), AWS, Azure, Waterfall & Agile Delivery, PMI Governance, Vendor Management, Budget Ownership, Data & Integration Platforms, AI-Assisted Delivery";

const CONTACT_LOCATION: &str = "Toronto, Canada · Open to Tech & Consulting Roles";
const CONTACT_BLURB: &str = "Happy to connect about product delivery, platform reliability, and AI-enabled transformation.";

fn hero() -> String {
    format!(
        r#"<section id="hero">{}<h1>{}</h1><p class="lead">{}</p><p>{}</p></section>"#,
        pills(HERO_PILLS),
        escape(HEADLINE),
        escape(INTRO),
        escape(INTRO_DETAIL)
    )
}

fn metrics() -> String {
    let cells: String = METRICS.iter().map(|(v, l)| metric(v, l)).collect();
    format!(r#"<section id="metrics"><div class="grid">{cells}</div></section>"#)
}

fn capabilities() -> String {
    let cards: String = CAPABILITIES
        .iter()
        .map(|c| {
            format!(
                r#"<article class="capability-card"><h3>{}</h3><p>{}</p><p class="example">{}</p></article>"#,
                escape(c.title),
                escape(c.summary),
                escape(c.example)
            )
        })
        .collect();

    format!(
        concat!(
            r#"<section id="ai-delivery">"#,
            r#"<header><h2>AI as a Delivery Tool</h2>"#,
            "<p>{}</p>{}</header>",
            r#"<div class="grid">{}</div>"#,
            r#"<blockquote class="pull-quote">{}</blockquote>"#,
            "</section>"
        ),
        escape("I treat AI like internal tooling—something that improves speed, clarity, and decision quality across teams."),
        pill("Human-in-the-loop · Audit-ready"),
        cards,
        escape(PULL_QUOTE)
    )
}

fn principles() -> String {
    format!(
        r#"<section id="principles"><h2>How I Think About Delivery</h2>{}</section>"#,
        list(PRINCIPLES.iter().copied())
    )
}

fn projects() -> String {
    let cards: String = PROJECTS
        .iter()
        .map(|p| {
            format!(
                r#"<article class="project-card"><span class="tag">{}</span><h3>{}</h3><p>{}</p></article>"#,
                escape(p.tag),
                escape(p.title),
                escape(p.summary)
            )
        })
        .collect();

    format!(
        r#"<section id="projects"><header><h2>Selected Projects</h2>{}</header><div class="grid">{cards}</div></section>"#,
        pill("Outcome-first · Product-minded")
    )
}

fn quadrant(heading: &str, body: String) -> String {
    format!(
        r#"<div class="quadrant"><h4>{}</h4>{body}</div>"#,
        escape(heading)
    )
}

fn case_study() -> String {
    let quadrants = [
        quadrant("Problem", format!("<p>{}</p>", escape(study::PROBLEM))),
        quadrant("Constraints", list(study::CONSTRAINTS.iter().copied())),
        quadrant("Decision", format!("<p>{}</p>", escape(study::DECISION))),
        quadrant("Outcome", list(study::OUTCOME.iter().copied())),
    ]
    .concat();

    format!(
        concat!(
            r#"<section id="case-study"><header><h2>Case Study</h2>{}</header>"#,
            r#"<article class="case-study">"#,
            r#"<p class="tagline"><span class="tag">{}</span> • <span>{}</span></p>"#,
            "<h3>{}</h3>",
            r#"<div class="grid">{}</div>{}"#,
            "</article></section>"
        ),
        pill("Problem → Constraints → Decision → Outcome"),
        escape(study::TAG),
        escape(study::STACK),
        escape(study::TITLE),
        quadrants,
        pills(study::CLOSING_PILLS)
    )
}

fn skills() -> String {
    format!(
        r#"<section id="skills"><h2>Skills &amp; Methods</h2><p>{}</p></section>"#,
        escape(SKILLS)
    )
}

fn contact() -> String {
    format!(
        r#"<section id="contact"><h2>Let’s Connect</h2><p>{}</p><p>{}</p><div class="contact-links">{}{}</div></section>"#,
        escape(CONTACT_LOCATION),
        escape(CONTACT_BLURB),
        link(LINKEDIN_HREF, "LinkedIn", "button"),
        link(EMAIL_HREF, "Email", "button")
    )
}

/// Renders the Home view body.
pub fn render_home() -> String {
    [
        hero(),
        metrics(),
        capabilities(),
        principles(),
        projects(),
        case_study(),
        skills(),
        contact(),
    ]
    .concat()
}
