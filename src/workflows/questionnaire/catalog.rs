use super::domain::{
    ConditionPredicate, DealImpact, Priority, QuestionRecord, RiskAnnotationRecord, Severity,
    StrategicContext, Topic,
};

/// Read-only content table the engine consumes: authored questions plus risk
/// annotations. Injected at engine construction so tests can substitute
/// smaller tables.
#[derive(Debug)]
pub struct DiligenceCatalog {
    questions: Vec<QuestionRecord>,
    annotations: Vec<RiskAnnotationRecord>,
}

impl DiligenceCatalog {
    pub fn new(questions: Vec<QuestionRecord>, annotations: Vec<RiskAnnotationRecord>) -> Self {
        Self {
            questions,
            annotations,
        }
    }

    /// The shipped question and annotation banks.
    pub fn standard() -> Self {
        Self::new(standard_questions(), standard_annotations())
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn annotations(&self) -> &[RiskAnnotationRecord] {
        &self.annotations
    }
}

fn standard_questions() -> Vec<QuestionRecord> {
    vec![
        // Architecture & Technology Stack
        QuestionRecord {
            id: "arch-system-overview",
            topic: Topic::ArchitectureAndStack,
            priority: Priority::High,
            prompt: "Walk us through the end-to-end system architecture, from client entry points to persistence, including every externally hosted dependency.",
            rationale: "A coherent whiteboard narrative from the technical leadership is the fastest signal of how well the architecture is actually understood in-house.",
            condition: ConditionPredicate::any(),
            strategic: Some(StrategicContext {
                impact: DealImpact::ValuationRisk,
                warning_sign: "Nobody in the room can draw the system without contradicting a colleague.",
                workstream: "architecture-review",
            }),
        },
        QuestionRecord {
            id: "arch-stack-inventory",
            topic: Topic::ArchitectureAndStack,
            priority: Priority::High,
            prompt: "Which languages, frameworks, and major runtime versions are in production today, and which of them are past or approaching end of support?",
            rationale: "Version drift quantifies forced near-term engineering spend that rarely appears in management forecasts.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "arch-service-boundaries",
            topic: Topic::ArchitectureAndStack,
            priority: Priority::Medium,
            prompt: "How are service or module boundaries drawn, and where have those boundaries been violated to ship faster?",
            rationale: "Boundary erosion is the usual precursor to the 'everything touches everything' maintenance trap.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "arch-scalability-limits",
            topic: Topic::ArchitectureAndStack,
            priority: Priority::High,
            prompt: "What is the next hard scalability ceiling — the component that breaks first at 5x current load — and what would removing it cost?",
            rationale: "Growth cases priced into the deal are worthless if the platform cannot carry them without a rewrite.",
            condition: ConditionPredicate {
                scale_intensities: Some(&["moderate", "intense"]),
                ..ConditionPredicate::any()
            },
            strategic: Some(StrategicContext {
                impact: DealImpact::GrowthEnabler,
                warning_sign: "The answer is a shrug or 'we will scale horizontally' with no numbers.",
                workstream: "scalability-assessment",
            }),
        },
        QuestionRecord {
            id: "arch-cloud-cost-governance",
            topic: Topic::ArchitectureAndStack,
            priority: Priority::Medium,
            prompt: "How is cloud spend attributed to product features, and who owns the unit-economics of the most expensive workloads?",
            rationale: "Cloud-native teams without cost attribution routinely hide double-digit-percentage gross-margin erosion.",
            condition: ConditionPredicate {
                tech_archetypes: Some(&["modern-cloud-native"]),
                ..ConditionPredicate::any()
            },
            strategic: Some(StrategicContext {
                impact: DealImpact::CostDriver,
                warning_sign: "One monthly invoice, no per-service breakdown, nobody accountable.",
                workstream: "cost-optimization",
            }),
        },
        QuestionRecord {
            id: "arch-managed-services-inventory",
            topic: Topic::ArchitectureAndStack,
            priority: Priority::Medium,
            prompt: "Which proprietary managed services (queues, databases, ML, identity) is the platform built on, and what is the realistic migration path off each?",
            rationale: "Deep managed-service coupling constrains exit options and future hosting negotiations.",
            condition: ConditionPredicate {
                tech_archetypes: Some(&["modern-cloud-native"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "arch-legacy-modernization-path",
            topic: Topic::ArchitectureAndStack,
            priority: Priority::High,
            prompt: "What is the documented modernization plan for the legacy components, what has been delivered against it so far, and what blocked the rest?",
            rationale: "A plan with no delivered milestones is a wish; the delta between plan and delivery is the real modernization budget.",
            condition: ConditionPredicate {
                tech_archetypes: Some(&["hybrid-legacy", "on-prem-monolith"]),
                ..ConditionPredicate::any()
            },
            strategic: Some(StrategicContext {
                impact: DealImpact::ValuationRisk,
                warning_sign: "The modernization plan restarts from scratch every fiscal year.",
                workstream: "modernization-program",
            }),
        },
        QuestionRecord {
            id: "arch-multi-tenancy-model",
            topic: Topic::ArchitectureAndStack,
            priority: Priority::Medium,
            prompt: "Describe the tenancy model: how is customer data isolated, and which customers, if any, run on forked or pinned versions?",
            rationale: "Per-customer forks silently convert a product company into a services company.",
            condition: ConditionPredicate {
                product_types: Some(&["b2b-saas", "api-platform"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "arch-api-surface-stability",
            topic: Topic::ArchitectureAndStack,
            priority: Priority::Medium,
            prompt: "How are public API contracts versioned and deprecated, and when did a breaking change last reach customers unannounced?",
            rationale: "API discipline predicts integration pain for every future partner and acquirer.",
            condition: ConditionPredicate {
                product_types: Some(&["api-platform", "b2b-saas", "marketplace"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "arch-containerization-posture",
            topic: Topic::ArchitectureAndStack,
            priority: Priority::Standard,
            prompt: "What share of workloads run containerized with declarative infrastructure, and what still requires hand-built hosts?",
            rationale: "Snowflake hosts concentrate operational knowledge in whoever built them.",
            condition: ConditionPredicate {
                tech_archetypes: Some(&["modern-cloud-native", "hybrid-legacy"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "arch-third-party-dependencies",
            topic: Topic::ArchitectureAndStack,
            priority: Priority::Standard,
            prompt: "Which third-party components or data feeds would take the product down within a week if they disappeared, and what contracts back them?",
            rationale: "Critical dependencies without contractual cover are uninsured single points of failure.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "arch-build-vs-buy-history",
            topic: Topic::ArchitectureAndStack,
            priority: Priority::Standard,
            prompt: "Where has the team built in-house what the market sells off the shelf, and what does maintaining those components cost annually?",
            rationale: "Bespoke infrastructure is a recurring cost and a recruiting constraint, not an asset.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        // Engineering Practices & Delivery
        QuestionRecord {
            id: "eng-dev-process-overview",
            topic: Topic::EngineeringPractices,
            priority: Priority::High,
            prompt: "Describe the path of a typical change from idea to production: planning, review, testing, approval, deployment.",
            rationale: "The real process, narrated step by step, exposes gaps no methodology slide will admit.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "eng-release-cadence",
            topic: Topic::EngineeringPractices,
            priority: Priority::High,
            prompt: "How often do you ship to production, how often do releases roll back, and what was the longest release freeze in the last year?",
            rationale: "Cadence and rollback rate together measure delivery health better than any self-assessment.",
            condition: ConditionPredicate::any(),
            strategic: Some(StrategicContext {
                impact: DealImpact::OperationalRisk,
                warning_sign: "Quarterly releases defended as a deliberate choice rather than a constraint.",
                workstream: "delivery-metrics",
            }),
        },
        QuestionRecord {
            id: "eng-test-coverage",
            topic: Topic::EngineeringPractices,
            priority: Priority::Medium,
            prompt: "Which parts of the system have meaningful automated test coverage, and which releases still rely on manual regression passes?",
            rationale: "Manual regression gates cap release frequency and concentrate risk in whoever runs them.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "eng-code-review-discipline",
            topic: Topic::EngineeringPractices,
            priority: Priority::Medium,
            prompt: "What are the code review rules, and who is allowed to merge without review?",
            rationale: "Review exemptions map exactly to the code nobody else understands.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "eng-tech-debt-register",
            topic: Topic::EngineeringPractices,
            priority: Priority::High,
            prompt: "Show us the technical debt register: what is on it, how is it prioritized, and what share of each sprint is reserved for paying it down?",
            rationale: "Legacy-heavy estates without a managed debt register are accruing interest nobody is booking.",
            condition: ConditionPredicate {
                tech_archetypes: Some(&["hybrid-legacy", "on-prem-monolith"]),
                ..ConditionPredicate::any()
            },
            strategic: Some(StrategicContext {
                impact: DealImpact::ValuationRisk,
                warning_sign: "Debt exists only in engineers' heads and surfaces as 'that area is risky to touch'.",
                workstream: "modernization-program",
            }),
        },
        QuestionRecord {
            id: "eng-ci-cd-maturity",
            topic: Topic::EngineeringPractices,
            priority: Priority::Medium,
            prompt: "What does the CI/CD pipeline automate today — build, tests, security scans, deployment — and what still needs a human in the loop?",
            rationale: "Pipeline gaps show where delivery speed and reproducibility actually stand.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "eng-documentation-state",
            topic: Topic::EngineeringPractices,
            priority: Priority::Standard,
            prompt: "If the three most senior engineers left tomorrow, which systems could be operated and extended from documentation alone?",
            rationale: "The honest answer sizes the key-person discount on the engineering organization.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "eng-outsourced-delivery-controls",
            topic: Topic::EngineeringPractices,
            priority: Priority::High,
            prompt: "For outsourced or partner-delivered code: who reviews it, who owns the repositories, and what happens to velocity if the contract ends?",
            rationale: "Outsourced delivery without in-house review transfers architectural control to the vendor.",
            condition: ConditionPredicate {
                operating_models: Some(&["outsourced", "hybrid-teams"]),
                ..ConditionPredicate::any()
            },
            strategic: Some(StrategicContext {
                impact: DealImpact::OperationalRisk,
                warning_sign: "Vendor staff are the only committers on revenue-critical repositories.",
                workstream: "vendor-transition",
            }),
        },
        QuestionRecord {
            id: "eng-replatforming-plan",
            topic: Topic::EngineeringPractices,
            priority: Priority::High,
            prompt: "For the migration currently in flight: what is the cutover plan, what is the rollback plan, and what happens to feature delivery until it lands?",
            rationale: "In-flight migrations are where diligence-period surprises live; both plans must exist in writing.",
            condition: ConditionPredicate {
                transformation_states: Some(&["migrating", "replatforming"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "eng-tooling-licenses",
            topic: Topic::EngineeringPractices,
            priority: Priority::Standard,
            prompt: "Which development and build tools are commercially licensed, and are any licenses tied to the current legal entity?",
            rationale: "Entity-bound tooling licenses become day-one blockers in a transaction.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "eng-velocity-trend",
            topic: Topic::EngineeringPractices,
            priority: Priority::Standard,
            prompt: "How has delivery throughput moved over the past two years relative to engineering headcount?",
            rationale: "Flat output on growing headcount means the platform is absorbing the new capacity.",
            condition: ConditionPredicate {
                growth_stages: Some(&["scaling", "mature"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        // Infrastructure & Operations
        QuestionRecord {
            id: "ops-availability-slas",
            topic: Topic::InfrastructureAndOperations,
            priority: Priority::High,
            prompt: "What availability do customer contracts promise, what was actually delivered over the last twelve months, and what credits were paid?",
            rationale: "The gap between contracted and delivered availability is a quantified liability.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "ops-incident-history",
            topic: Topic::InfrastructureAndOperations,
            priority: Priority::High,
            prompt: "Walk us through the three worst production incidents of the past two years: cause, customer impact, and what structurally changed afterwards.",
            rationale: "Post-incident follow-through separates organizations that learn from those that apologize.",
            condition: ConditionPredicate::any(),
            strategic: Some(StrategicContext {
                impact: DealImpact::OperationalRisk,
                warning_sign: "The same root cause appears in more than one of the three stories.",
                workstream: "operational-resilience",
            }),
        },
        QuestionRecord {
            id: "ops-observability-stack",
            topic: Topic::InfrastructureAndOperations,
            priority: Priority::Medium,
            prompt: "How would the team detect, within minutes, that checkout or the equivalent revenue path is silently failing for 5% of users?",
            rationale: "Concrete detection stories reveal whether observability is instrumented or aspirational.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "ops-disaster-recovery",
            topic: Topic::InfrastructureAndOperations,
            priority: Priority::High,
            prompt: "When was the disaster-recovery plan last exercised end to end, and what were the measured recovery time and data loss?",
            rationale: "At meaningful revenue, an untested DR plan is indistinguishable from no plan.",
            condition: ConditionPredicate {
                revenue_min: Some("5-25m"),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "ops-on-call-model",
            topic: Topic::InfrastructureAndOperations,
            priority: Priority::Medium,
            prompt: "Who carries the pager, how is the rotation staffed, and what does a typical on-call week look like in pages per night?",
            rationale: "Chronic pager load predicts both attrition and the backlog of unfixed reliability debt.",
            condition: ConditionPredicate {
                headcount_min: Some("11-50"),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "ops-capacity-planning",
            topic: Topic::InfrastructureAndOperations,
            priority: Priority::Medium,
            prompt: "How is capacity planned ahead of peak events, and when did demand last exceed provisioned capacity?",
            rationale: "High-intensity workloads punish reactive capacity management with visible outages.",
            condition: ConditionPredicate {
                scale_intensities: Some(&["intense"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "ops-datacenter-footprint",
            topic: Topic::InfrastructureAndOperations,
            priority: Priority::High,
            prompt: "Inventory the physical or colocation footprint: hardware age, refresh budget, remote-hands arrangements, and facility contract terms.",
            rationale: "Self-managed infrastructure carries capex cliffs and facility lock-ins that never show in the P&L run-rate.",
            condition: ConditionPredicate {
                tech_archetypes: Some(&["self-managed-infra", "on-prem-monolith"]),
                ..ConditionPredicate::any()
            },
            strategic: Some(StrategicContext {
                impact: DealImpact::CostDriver,
                warning_sign: "Hardware past warranty with no refresh line in the budget.",
                workstream: "infrastructure-assessment",
            }),
        },
        QuestionRecord {
            id: "ops-cloud-resilience-zones",
            topic: Topic::InfrastructureAndOperations,
            priority: Priority::Medium,
            prompt: "Which workloads survive the loss of an availability zone without intervention, and which require manual failover?",
            rationale: "Zone-resilience claims are cheap; the manual-failover list is the truthful version.",
            condition: ConditionPredicate {
                tech_archetypes: Some(&["modern-cloud-native"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "ops-runbook-coverage",
            topic: Topic::InfrastructureAndOperations,
            priority: Priority::Standard,
            prompt: "Which operational procedures exist as executable runbooks versus tribal knowledge held by specific operators?",
            rationale: "Runbook coverage is the transferability score of the operations function.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "ops-change-management",
            topic: Topic::InfrastructureAndOperations,
            priority: Priority::Standard,
            prompt: "How are production changes approved and audited, and how often does the emergency-change path get used?",
            rationale: "A heavily used emergency path means the normal path does not fit how the team actually works.",
            condition: ConditionPredicate {
                company_age_min: Some("5-10yr"),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "ops-environment-parity",
            topic: Topic::InfrastructureAndOperations,
            priority: Priority::Standard,
            prompt: "How closely do staging environments mirror production, and which classes of defect routinely surface only in production?",
            rationale: "Parity gaps convert every release into a live experiment on customers.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        // Security, Data & Compliance
        QuestionRecord {
            id: "sec-security-program",
            topic: Topic::SecurityDataAndCompliance,
            priority: Priority::High,
            prompt: "Who owns security, what does the security roadmap contain for the next twelve months, and what budget backs it?",
            rationale: "Security without a named owner and budget is a compliance checkbox, not a program.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "sec-access-controls",
            topic: Topic::SecurityDataAndCompliance,
            priority: Priority::High,
            prompt: "How is access to production systems and customer data granted, reviewed, and revoked, and when was the last access recertification?",
            rationale: "Stale production access is the most common finding that derails security sign-off late in a deal.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "sec-data-inventory",
            topic: Topic::SecurityDataAndCompliance,
            priority: Priority::High,
            prompt: "Produce the data inventory: what personal or sensitive data is held, where, under which retention rules, and who can export it?",
            rationale: "You cannot price privacy risk on data nobody has mapped.",
            condition: ConditionPredicate {
                data_sensitivities: Some(&["pii", "regulated"]),
                ..ConditionPredicate::any()
            },
            strategic: Some(StrategicContext {
                impact: DealImpact::ValuationRisk,
                warning_sign: "The inventory is assembled for the first time during diligence.",
                workstream: "privacy-compliance",
            }),
        },
        QuestionRecord {
            id: "sec-gdpr-readiness",
            topic: Topic::SecurityDataAndCompliance,
            priority: Priority::High,
            prompt: "How are GDPR obligations operationalized — lawful bases, subject-access requests, processor agreements, breach notification timelines?",
            rationale: "European revenue carries regulatory exposure that transfers to the buyer at closing.",
            condition: ConditionPredicate {
                geographies: Some(&["eu", "uk"]),
                data_sensitivities: Some(&["pii", "regulated"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "sec-us-privacy-readiness",
            topic: Topic::SecurityDataAndCompliance,
            priority: Priority::Medium,
            prompt: "Which US state privacy regimes apply to the customer base, and how are consumer rights requests handled today?",
            rationale: "State-by-state privacy obligations accumulate quietly until an enforcement letter arrives.",
            condition: ConditionPredicate {
                geographies: Some(&["us"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "sec-regulated-certifications",
            topic: Topic::SecurityDataAndCompliance,
            priority: Priority::High,
            prompt: "Which certifications and attestations (SOC 2, ISO 27001, sector-specific) are current, and what did the last audit flag?",
            rationale: "Regulated-data businesses live or die on audit findings the data room tends to summarize generously.",
            condition: ConditionPredicate {
                data_sensitivities: Some(&["regulated"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "sec-pentest-history",
            topic: Topic::SecurityDataAndCompliance,
            priority: Priority::Medium,
            prompt: "When was the last independent penetration test, what were the critical findings, and which remain open?",
            rationale: "Open criticals with closed budgets tell you where security really ranks.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "sec-vendor-risk",
            topic: Topic::SecurityDataAndCompliance,
            priority: Priority::Medium,
            prompt: "How are subprocessors and critical vendors security-assessed before onboarding, and how often are they re-reviewed?",
            rationale: "Your security posture is capped by the weakest vendor with production access.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "sec-secure-sdlc",
            topic: Topic::SecurityDataAndCompliance,
            priority: Priority::Standard,
            prompt: "Where do security checks sit in the development lifecycle — dependency scanning, static analysis, threat modeling — and who acts on the output?",
            rationale: "Unactioned scanner output is security theater with a subscription fee.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "sec-data-residency",
            topic: Topic::SecurityDataAndCompliance,
            priority: Priority::Medium,
            prompt: "Which customer commitments exist on data residency, and can the platform actually pin a tenant's data to a region today?",
            rationale: "Residency promised in contracts but not enforced in architecture is a breach waiting for an auditor.",
            condition: ConditionPredicate {
                geographies: Some(&["eu", "uk", "apac", "multi-region"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "sec-breach-history",
            topic: Topic::SecurityDataAndCompliance,
            priority: Priority::High,
            prompt: "Describe every security incident involving customer data in the company's history, including those that did not meet notification thresholds.",
            rationale: "Undisclosed incidents discovered post-close become the buyer's litigation.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        // Team & Organization
        QuestionRecord {
            id: "team-org-structure",
            topic: Topic::TeamAndOrganization,
            priority: Priority::High,
            prompt: "Map the engineering organization: teams, reporting lines, and which team owns each revenue-critical system.",
            rationale: "Ownership gaps in the org map become incident response gaps in production.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "team-key-person-risk",
            topic: Topic::TeamAndOrganization,
            priority: Priority::High,
            prompt: "For each critical system, who are the two people who could rebuild or operate it alone, and what retention arrangements cover them?",
            rationale: "Key-person exposure is the single most common source of post-close value leakage in technical teams.",
            condition: ConditionPredicate::any(),
            strategic: Some(StrategicContext {
                impact: DealImpact::OperationalRisk,
                warning_sign: "The same name answers for more than two critical systems.",
                workstream: "retention-planning",
            }),
        },
        QuestionRecord {
            id: "team-retention-trend",
            topic: Topic::TeamAndOrganization,
            priority: Priority::Medium,
            prompt: "What is engineering attrition over the past two years, and how does regretted attrition concentrate by team or seniority?",
            rationale: "Concentrated regretted attrition marks the teams where something is already wrong.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "team-hiring-pipeline",
            topic: Topic::TeamAndOrganization,
            priority: Priority::Medium,
            prompt: "What is the current hiring plan, time-to-fill for senior roles, and offer-acceptance rate?",
            rationale: "Growth-stage plans assume hiring throughput the local market may not supply.",
            condition: ConditionPredicate {
                growth_stages: Some(&["startup", "scaling"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "team-outsourcing-mix",
            topic: Topic::TeamAndOrganization,
            priority: Priority::High,
            prompt: "What share of engineering capacity is external, through which firms, under what notice periods, and who holds the knowledge when they roll off?",
            rationale: "External capacity with short notice periods is capacity the buyer may not actually be acquiring.",
            condition: ConditionPredicate {
                operating_models: Some(&["outsourced", "hybrid-teams"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "team-eng-leadership-depth",
            topic: Topic::TeamAndOrganization,
            priority: Priority::Medium,
            prompt: "Below the CTO, who can independently run delivery, architecture, and operations, and have they done so during an absence?",
            rationale: "Leadership depth determines whether the organization survives the integration period intact.",
            condition: ConditionPredicate {
                headcount_min: Some("51-200"),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "team-compensation-equity",
            topic: Topic::TeamAndOrganization,
            priority: Priority::Standard,
            prompt: "How does engineering compensation compare to the local market, and what unvested equity is at stake in a change of control?",
            rationale: "Below-market pay plus accelerating equity is a resignation wave scheduled for closing day.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "team-knowledge-silos",
            topic: Topic::TeamAndOrganization,
            priority: Priority::Medium,
            prompt: "Which legacy subsystems are understood by exactly one person, and what is the plan to change that?",
            rationale: "Legacy estates tend to concentrate into single-custodian silos that retire with their custodian.",
            condition: ConditionPredicate {
                tech_archetypes: Some(&["hybrid-legacy", "on-prem-monolith"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "team-remote-model",
            topic: Topic::TeamAndOrganization,
            priority: Priority::Standard,
            prompt: "How is the team distributed across locations and time zones, and which roles are tied to specific jurisdictions?",
            rationale: "Jurisdiction-bound roles constrain post-close restructuring options.",
            condition: ConditionPredicate::any(),
            strategic: None,
        },
        QuestionRecord {
            id: "team-culture-integration",
            topic: Topic::TeamAndOrganization,
            priority: Priority::Medium,
            prompt: "What has been the team's experience of previous ownership or leadership changes, and who left as a result?",
            rationale: "Past merger behavior is the best predictor of how this team will absorb the next one.",
            condition: ConditionPredicate {
                transaction_types: Some(&["merger", "acquisition"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        // Transaction & Separation Readiness
        QuestionRecord {
            id: "txn-separation-scope",
            topic: Topic::TransactionReadiness,
            priority: Priority::High,
            prompt: "Which systems, licenses, and teams are shared with the parent or seller, and what is the proposed separation sequence for each?",
            rationale: "Carve-out cost and timeline are set by the shared-asset list, not by the deal model.",
            condition: ConditionPredicate {
                transaction_types: Some(&["carve-out"]),
                ..ConditionPredicate::any()
            },
            strategic: Some(StrategicContext {
                impact: DealImpact::IntegrationRisk,
                warning_sign: "The shared-asset list grows every time a new stakeholder is interviewed.",
                workstream: "separation-planning",
            }),
        },
        QuestionRecord {
            id: "txn-shared-systems-inventory",
            topic: Topic::TransactionReadiness,
            priority: Priority::High,
            prompt: "Inventory every system where data or identity is commingled with another entity: directories, ERP, data warehouses, CI infrastructure.",
            rationale: "Commingled identity and data stores are the longest poles in any separation or merger of estates.",
            condition: ConditionPredicate {
                transaction_types: Some(&["carve-out", "merger"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "txn-tsa-requirements",
            topic: Topic::TransactionReadiness,
            priority: Priority::High,
            prompt: "Which services must the seller keep providing after close, for how long, at what cost, and what is the exit plan from each?",
            rationale: "Transition service agreements without exit plans become permanent dependencies at escalating prices.",
            condition: ConditionPredicate {
                transaction_types: Some(&["carve-out"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "txn-ip-ownership",
            topic: Topic::TransactionReadiness,
            priority: Priority::High,
            prompt: "Confirm chain of title for all code: contractor agreements, open-source license obligations, and any code the company uses but does not own.",
            rationale: "IP gaps found after close reprice the deal in the seller's favor, retroactively.",
            condition: ConditionPredicate {
                exclude_transaction_types: Some(&["minority-stake"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "txn-integration-roadmap",
            topic: Topic::TransactionReadiness,
            priority: Priority::High,
            prompt: "Which buyer-side systems must this platform integrate with in year one, and where do data models or identity schemes collide?",
            rationale: "Integration collisions identified in diligence cost a fraction of those discovered in execution.",
            condition: ConditionPredicate {
                transaction_types: Some(&["acquisition", "merger"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "txn-standalone-cost-model",
            topic: Topic::TransactionReadiness,
            priority: Priority::Medium,
            prompt: "What does the technology cost base look like standalone — infrastructure, licenses, tooling, security — once parent-provided services are repriced at market?",
            rationale: "Parent-subsidized IT makes carve-out run-rates look structurally better than they are.",
            condition: ConditionPredicate {
                transaction_types: Some(&["carve-out", "growth-investment"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "txn-contract-assignability",
            topic: Topic::TransactionReadiness,
            priority: Priority::Medium,
            prompt: "Which technology contracts require consent to assign on a change of control, and which counterparties have leverage to reprice?",
            rationale: "Change-of-control clauses in critical vendor contracts are negotiating leverage the other side knows it holds.",
            condition: ConditionPredicate {
                exclude_transaction_types: Some(&["minority-stake"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "txn-growth-investment-thesis",
            topic: Topic::TransactionReadiness,
            priority: Priority::High,
            prompt: "Where would the next tranche of engineering investment go, and what evidence supports that ranking?",
            rationale: "A growth check needs a technology plan with the same rigor as the commercial plan it funds.",
            condition: ConditionPredicate {
                transaction_types: Some(&["growth-investment", "minority-stake"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "txn-synergy-dependencies",
            topic: Topic::TransactionReadiness,
            priority: Priority::Medium,
            prompt: "Which modeled synergies depend on technology work, and has engineering leadership seen and costed that list?",
            rationale: "Synergies engineering has never seen are synergies that will not be delivered.",
            condition: ConditionPredicate {
                transaction_types: Some(&["merger"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "txn-licensing-transfer",
            topic: Topic::TransactionReadiness,
            priority: Priority::Medium,
            prompt: "How are perpetual licenses tracked against entitlements, and what audit exposure transfers with the customer base?",
            rationale: "Perpetual-license estates carry latent true-up liabilities on both the vendor and customer side.",
            condition: ConditionPredicate {
                business_models: Some(&["perpetual-license"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
        QuestionRecord {
            id: "txn-day-one-readiness",
            topic: Topic::TransactionReadiness,
            priority: Priority::Medium,
            prompt: "What must be true on day one — access, monitoring, billing, support handoff — and who owns the checklist for each item?",
            rationale: "Day-one failures are cheap to prevent and very expensive to explain to customers.",
            condition: ConditionPredicate {
                transaction_types: Some(&["carve-out", "acquisition", "merger"]),
                ..ConditionPredicate::any()
            },
            strategic: None,
        },
    ]
}

fn standard_annotations() -> Vec<RiskAnnotationRecord> {
    vec![
        RiskAnnotationRecord {
            id: "technical-debt-accumulation",
            title: "Technical debt accumulation",
            detail: "Hybrid and monolithic estates accumulate unbooked modernization liability. Expect material engineering spend before the platform can absorb the growth case.",
            severity: Severity::High,
            condition: ConditionPredicate {
                tech_archetypes: Some(&["hybrid-legacy", "on-prem-monolith"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "eol-stack-exposure",
            title: "End-of-life stack exposure",
            detail: "Monolithic on-prem platforms frequently sit on runtimes or operating systems past vendor support, converting security patching into bespoke engineering.",
            severity: Severity::High,
            condition: ConditionPredicate {
                tech_archetypes: Some(&["on-prem-monolith"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "cloud-concentration-lock-in",
            title: "Cloud provider concentration",
            detail: "Deep coupling to one provider's proprietary services constrains hosting negotiations and any future multi-cloud or repatriation strategy.",
            severity: Severity::Medium,
            condition: ConditionPredicate {
                tech_archetypes: Some(&["modern-cloud-native"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "gdpr-exposure",
            title: "GDPR regulatory exposure",
            detail: "Personal data of European residents brings GDPR obligations — and fine exposure of up to 4% of global revenue — that transfer to the buyer at closing.",
            severity: Severity::High,
            condition: ConditionPredicate {
                geographies: Some(&["eu", "uk"]),
                data_sensitivities: Some(&["pii", "regulated"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "uk-transfer-regime",
            title: "UK data transfer regime",
            detail: "Post-Brexit UK transfers run under a separate adequacy and contractual regime from the EU; dual-track compliance is commonly missed.",
            severity: Severity::Medium,
            condition: ConditionPredicate {
                geographies: Some(&["uk"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "us-state-privacy-patchwork",
            title: "US state privacy patchwork",
            detail: "State privacy statutes now cover most of the US customer base with diverging consumer-rights and notice obligations; compliance rarely keeps pace organically.",
            severity: Severity::Medium,
            condition: ConditionPredicate {
                geographies: Some(&["us"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "ccpa-scope-creep",
            title: "CCPA/CPRA scope creep",
            detail: "California's regime keeps expanding through rulemaking; businesses that scoped compliance once, years ago, are usually out of date.",
            severity: Severity::Low,
            condition: ConditionPredicate {
                geographies: Some(&["us"]),
                data_sensitivities: Some(&["pii", "regulated"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "apac-data-localization",
            title: "APAC data localization",
            detail: "Several APAC jurisdictions require in-country storage or processing for specific data classes; architecture designed for one region often cannot comply.",
            severity: Severity::Medium,
            condition: ConditionPredicate {
                geographies: Some(&["apac"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "regulated-data-burden",
            title: "Regulated data compliance burden",
            detail: "Regulated data classes bring sector audits, mandatory certifications, and breach regimes whose ongoing cost belongs in the operating model, not the synergy line.",
            severity: Severity::High,
            condition: ConditionPredicate {
                data_sensitivities: Some(&["regulated"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "pii-governance-gap",
            title: "PII governance gap",
            detail: "Companies holding personal data without a dedicated privacy function typically lack the data maps and retention enforcement regulators now expect by default.",
            severity: Severity::Medium,
            condition: ConditionPredicate {
                data_sensitivities: Some(&["pii"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "carve-out-entanglement",
            title: "Carve-out entanglement",
            detail: "Carve-out perimeters drawn by finance rarely match how systems are actually shared; expect the separation scope to grow through diligence and into execution.",
            severity: Severity::High,
            condition: ConditionPredicate {
                transaction_types: Some(&["carve-out"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "tsa-scope-underestimation",
            title: "TSA scope underestimation",
            detail: "Transition service agreements priced before the shared-systems inventory is complete systematically understate duration and cost.",
            severity: Severity::High,
            condition: ConditionPredicate {
                transaction_types: Some(&["carve-out"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "shared-services-separation",
            title: "Shared services separation",
            detail: "Identity, ERP, and data-platform separation is the critical path of most carve-outs and estate mergers; it needs its own workstream and owner from day one.",
            severity: Severity::Medium,
            condition: ConditionPredicate {
                transaction_types: Some(&["carve-out", "merger"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "integration-fatigue",
            title: "Integration fatigue",
            detail: "A team still absorbing a previous acquisition has limited capacity for another integration program; sequencing matters more than the plan admits.",
            severity: Severity::Medium,
            condition: ConditionPredicate {
                transformation_states: Some(&["post-acquisition-integration"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "migration-execution-risk",
            title: "Migration execution risk",
            detail: "An in-flight migration or replatforming concentrates delivery risk exactly in the diligence-to-close window; insist on written cutover and rollback plans.",
            severity: Severity::High,
            condition: ConditionPredicate {
                transformation_states: Some(&["migrating", "replatforming"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "outsourced-ip-ownership",
            title: "Outsourced IP ownership",
            detail: "Code written by external firms without watertight assignment clauses clouds chain of title for the core asset being acquired.",
            severity: Severity::High,
            condition: ConditionPredicate {
                operating_models: Some(&["outsourced"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "hybrid-team-accountability",
            title: "Hybrid team accountability",
            detail: "Mixed internal-external teams blur ownership of quality and operations; verify that incident and review accountability sits with employees.",
            severity: Severity::Medium,
            condition: ConditionPredicate {
                operating_models: Some(&["hybrid-teams"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "key-person-dependency",
            title: "Key person dependency",
            detail: "In-house teams at early and scaling stages concentrate system knowledge in a handful of founding engineers; retention terms belong in the deal documents.",
            severity: Severity::High,
            condition: ConditionPredicate {
                growth_stages: Some(&["startup", "scaling"]),
                operating_models: Some(&["in-house"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "early-process-gaps",
            title: "Early-stage process gaps",
            detail: "Startup-stage engineering usually trades process for speed; assume change management, access control, and testing discipline need investment post-close.",
            severity: Severity::Medium,
            condition: ConditionPredicate {
                growth_stages: Some(&["startup"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "turnaround-attrition-risk",
            title: "Turnaround attrition risk",
            detail: "Turnaround situations bleed senior engineers first; the people needed to execute the recovery plan may already be interviewing elsewhere.",
            severity: Severity::High,
            condition: ConditionPredicate {
                growth_stages: Some(&["turnaround"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "scaling-headroom-limits",
            title: "Scaling headroom limits",
            detail: "Workloads already running at high intensity leave little headroom for the growth case; capacity ceilings should be load-tested, not asserted.",
            severity: Severity::Medium,
            condition: ConditionPredicate {
                scale_intensities: Some(&["intense"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "subscription-churn-visibility",
            title: "Subscription churn visibility",
            detail: "Subscription metrics are only as good as the events feeding them; verify that churn and expansion figures are computed from billing truth, not dashboards.",
            severity: Severity::Low,
            condition: ConditionPredicate {
                business_models: Some(&["subscription"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "usage-billing-accuracy",
            title: "Usage billing accuracy",
            detail: "Usage-based revenue depends on metering pipelines that silently under- or over-bill when they drift; audit the reconciliation process.",
            severity: Severity::Medium,
            condition: ConditionPredicate {
                business_models: Some(&["usage-based"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "services-margin-drag",
            title: "Services margin drag",
            detail: "Services-led delivery models pull engineering into billable work, starving the product roadmap the valuation is built on.",
            severity: Severity::Medium,
            condition: ConditionPredicate {
                business_models: Some(&["services-led"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "license-audit-exposure",
            title: "License audit exposure",
            detail: "Perpetual-license estates accumulate entitlement drift on both sides: customers exceeding grants, and the company exceeding its own vendor entitlements.",
            severity: Severity::Medium,
            condition: ConditionPredicate {
                business_models: Some(&["perpetual-license"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "marketplace-trust-surface",
            title: "Marketplace trust and fraud surface",
            detail: "Two-sided and consumer platforms carry fraud, abuse, and content-moderation exposure that scales with success and is chronically under-resourced.",
            severity: Severity::Medium,
            condition: ConditionPredicate {
                product_types: Some(&["marketplace", "consumer-app"]),
                ..ConditionPredicate::any()
            },
        },
        RiskAnnotationRecord {
            id: "embedded-supply-chain",
            title: "Embedded supply chain exposure",
            detail: "Embedded software ties release cadence to hardware partners and component availability; field-update capability determines how fast defects can be fixed.",
            severity: Severity::Medium,
            condition: ConditionPredicate {
                product_types: Some(&["embedded-software"]),
                ..ConditionPredicate::any()
            },
        },
    ]
}
