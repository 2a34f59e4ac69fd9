use serde::Serialize;

use crate::models::content::{EducationEntry, NoteEntry, WorkHistoryEntry};

/// The literal data behind the Experience view.
///
/// Built once at startup by [`ContentRepository::load`] and never mutated; the
/// only way to change it is to edit the literals below and rebuild.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContentRepository {
    pub work_history: Vec<WorkHistoryEntry>,
    pub education: Vec<EducationEntry>,
    pub notes: Vec<NoteEntry>,
}

impl ContentRepository {
    pub fn new(
        work_history: Vec<WorkHistoryEntry>,
        education: Vec<EducationEntry>,
        notes: Vec<NoteEntry>,
    ) -> Self {
        Self {
            work_history,
            education,
            notes,
        }
    }

    pub fn load() -> Self {
        Self::new(work_history(), education(), notes())
    }
}

fn role(
    organization: &str,
    title_line: &str,
    location_line: &str,
    date_range: &str,
    responsibilities: &[&str],
) -> WorkHistoryEntry {
    WorkHistoryEntry {
        organization: organization.to_string(),
        title_line: title_line.to_string(),
        location_line: location_line.to_string(),
        date_range: date_range.to_string(),
        responsibilities: responsibilities.iter().map(|s| s.to_string()).collect(),
    }
}

fn credential(title: &str, organization: &str, year: &str) -> EducationEntry {
    EducationEntry {
        title: title.to_string(),
        organization: Some(organization.to_string()),
        year: Some(year.to_string()),
    }
}

fn work_history() -> Vec<WorkHistoryEntry> {
    vec![
        role(
            "Sun Life Financial",
            "IT Delivery Manager",
            "Toronto, ON",
            "Feb 2023 – Feb 2025",
            &[
                "Led SAP S/4HANA Finance system upgrades and system-change initiatives using a Waterfall delivery model, managing scope, schedule, dependencies, and formal change control for internal Finance and Risk stakeholders.",
                "Negotiated and managed technology vendors and delivery partners, achieving 20% cost savings while improving delivery quality and responsiveness.",
                "Implemented proactive risk and issue management practices, resolving 95% of critical issues prior to executive escalation.",
                "Established engineering governance, change management, and release controls across cloud-hosted and enterprise platforms, reducing operational costs and delivery variability.",
                "Defined and executed SAP BTP Clean Core integration strategy using SAP Integration Suite (CPI), decoupling S/4HANA from AWS-hosted applications, enforcing API standards, minimizing custom code, and reducing integration-related production incidents by 25%.",
                "Managed AWS-hosted environments, overseeing deployment pipelines, monitoring, and cost optimization for internal and customer-facing applications.",
                "Applied Agile and SAFe practices within hybrid delivery models to accelerate feature throughput while aligning milestones with business priorities.",
                "Facilitated executive governance forums, presenting delivery status, financials, risks, and dependencies to senior leadership.",
                "Oversaw release planning, production readiness, and go-live execution, achieving zero high-severity incidents post-deployment.",
                "Strengthened IT governance and audit readiness by aligning delivery practices with enterprise security and compliance standards.",
                "Led globally distributed engineers and external partners, ensuring SLA adherence, consistent engineering standards, and delivery predictability.",
            ],
        ),
        role(
            "Cipla Pharmaceuticals",
            "IT Senior Manager",
            "New Jersey, USA & Mumbai, India",
            "Dec 2018 – Feb 2023",
            &[
                "Led large-scale enterprise application and platform modernization programs across North America and international markets, managing budgets up to $5M.",
                "Optimized vendor contracts and delivery financials, generating $500K in annual recurring savings.",
                "Directed hybrid cloud operations supporting mission-critical platforms, achieving 99.95% uptime and consistent SLA compliance.",
                "Executed projects using Waterfall delivery methodologies (requirements, design, build, test, deploy), supplemented with Agile workshops for solution exploration and stakeholder validation.",
                "Oversaw platform upgrades, patching, and disaster recovery planning, reducing operational risk exposure by 80%.",
                "Facilitated Change Advisory Board (CAB) processes for production systems, reducing high-priority change turnaround time by 35% and improving platform stability.",
                "Delivered complex order-to-cash, supply chain, and manufacturing software capabilities, integrating external partners, logistics providers, and financial systems.",
                "Applied Agile delivery practices to manage engineering backlogs and align feature delivery with regulatory compliance and business objectives.",
                "Enhanced observability and incident response through automated dashboards, improving stakeholder visibility and decision-making.",
                "Recognized as Cipla IT Ambassador (2020) for fostering a collaborative, high-performance engineering culture.",
            ],
        ),
        role(
            "Capgemini · DXC Technology · Mahindra Bristlecone",
            "Enterprise Software Consultant",
            "Mumbai, India",
            "Feb 2011 – Apr 2016",
            &[
                "Delivered large-scale enterprise platform migrations, modernizing legacy systems to improve scalability, performance, and long-term maintainability.",
                "Led backend remediation and optimization initiatives, resolving technical debt, improving processing efficiency, and stabilizing mission-critical applications.",
                "Designed and implemented system integrations across finance, supply chain, and operational platforms, enabling seamless data exchange and business continuity.",
                "Partnered with cross-functional stakeholders to translate complex business requirements into robust, production-ready software solutions.",
                "Managed integration testing, defect resolution, and post-release stabilization to ensure smooth production transitions.",
                "Developed custom backend services, automation, and reporting capabilities, reducing manual effort and improving operational efficiency by up to 25%.",
                "Supported platform upgrades and production support activities, strengthening reliability, observability, and incident response practices.",
                "Contributed to pre-sales and solution design efforts, shaping long-term platform roadmaps and delivery strategies for enterprise clients.",
            ],
        ),
    ]
}

fn education() -> Vec<EducationEntry> {
    vec![
        credential("Project Management Professional (PMP®)", "PMI", "Apr 2025"),
        credential(
            "MBA, Project & Program Management",
            "HULT International Business School, Boston",
            "2017",
        ),
        credential("B.Sc. Computer Science", "Chennai University, India", "2010"),
        credential(
            "SAP Certified Development Associate – ABAP NetWeaver 7.0",
            "SAP, Germany",
            "2011",
        ),
    ]
}

fn notes() -> Vec<NoteEntry> {
    [
        "Canadian PR",
        "Languages: English (Fluent), French (Beginner), Hindi (Fluent)",
    ]
    .into_iter()
    .map(|s| NoteEntry(s.to_string()))
    .collect()
}
