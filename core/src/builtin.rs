//! The shipped demo catalog: persona directory and intent grammar for the
//! three operating modes (government contract management, project delivery,
//! ATC customer support).
//!
//! Each plausible user phrasing that should resolve to a widget needs a
//! canonical phrase or keyword set here. Coverage gaps surface as `None`
//! results, which is an acceptable, observable outcome rather than an error.

use crate::pattern::{IntentPattern, PersonaProfile, Scope, WidgetType};

pub const MODE_GOVERNMENT: &str = "government";
pub const MODE_PROJECT: &str = "project";
pub const MODE_ATC: &str = "atc";

/// Personas that can open individual tickets and knowledge articles in the
/// support flow.
const SUPPORT_AGENTS: &[&str] = &["atc-support", "support-agent"];

fn profile(id: &str, mode: &str, display_name: &str) -> PersonaProfile {
    PersonaProfile {
        id: id.to_string(),
        mode: mode.to_string(),
        display_name: display_name.to_string(),
    }
}

struct PatternSpec {
    id: &'static str,
    widget: &'static str,
    phrases: &'static [&'static str],
    keywords: &'static [&'static str],
    personas: Scope,
    modes: Scope,
    priority: i32,
    response: &'static str,
}

impl PatternSpec {
    fn build(self) -> IntentPattern {
        IntentPattern {
            id: self.id.to_string(),
            widget_type: WidgetType::from(self.widget),
            canonical_phrases: self.phrases.iter().map(|p| p.to_string()).collect(),
            keywords: self.keywords.iter().map(|k| k.to_string()).collect(),
            personas: self.personas,
            modes: self.modes,
            priority: self.priority,
            response_template: self.response.to_string(),
        }
    }
}

/// The full pattern table and persona directory. Registration order matters:
/// it is the final tie-break, so shared reference-style patterns come first.
pub fn definitions() -> (Vec<IntentPattern>, Vec<PersonaProfile>) {
    let personas = vec![
        profile("cor", MODE_GOVERNMENT, "Contracting Officer's Representative"),
        profile("program-manager", MODE_GOVERNMENT, "Program Manager"),
        profile("stakeholder-lead", MODE_GOVERNMENT, "Stakeholder Lead"),
        profile("project-manager", MODE_PROJECT, "Project Manager"),
        profile("service-team-lead", MODE_PROJECT, "Service Team Lead"),
        profile("service-team-member", MODE_PROJECT, "Service Team Member"),
        profile("atc-executive", MODE_ATC, "Executive"),
        profile("atc-manager", MODE_ATC, "Support Manager"),
        profile("atc-support", MODE_ATC, "Support Agent"),
        profile("atc-csm", MODE_ATC, "Customer Success Manager"),
        profile("c-level", MODE_ATC, "C-Level Executive"),
        profile("cs-manager", MODE_ATC, "CS Manager"),
        profile("support-agent", MODE_ATC, "Support Agent (Classic)"),
    ];

    let specs = vec![
        // Reference-style patterns first: an explicit ticket or article id
        // beats every broader phrasing, hence the high priority.
        PatternSpec {
            id: "ticket-detail-by-ref",
            widget: "ticket-detail",
            phrases: &["ticket ticketref", "open ticket ticketref", "ticketref"],
            keywords: &["ticketref"],
            personas: Scope::All,
            modes: Scope::All,
            priority: 100,
            response: "Pulling up that ticket now.",
        },
        PatternSpec {
            id: "knowledge-article-by-ref",
            widget: "knowledge-article",
            phrases: &["kbref", "open kbref", "knowledge article kbref"],
            keywords: &["kbref"],
            personas: Scope::only(SUPPORT_AGENTS.iter().copied()),
            modes: Scope::All,
            priority: 100,
            response: "Opening that knowledge base article.",
        },
        PatternSpec {
            id: "most-urgent-ticket",
            widget: "ticket-detail",
            phrases: &[
                "most urgent access issue",
                "urgent access issue",
                "most urgent ticket",
            ],
            keywords: &["urgent"],
            personas: Scope::All,
            modes: Scope::All,
            priority: 40,
            response: "Here's the most urgent open issue right now.",
        },
        PatternSpec {
            id: "latest-end-user-request",
            widget: "ticket-list",
            phrases: &[
                "latest end user request",
                "latest user request",
                "newest end user requests",
            ],
            keywords: &["enduser"],
            personas: Scope::All,
            modes: Scope::All,
            priority: 40,
            response: "Here are the most recent end user requests.",
        },
        PatternSpec {
            id: "ticket-list",
            widget: "ticket-list",
            phrases: &[
                "zoho tickets",
                "zoho desk tickets",
                "my tickets",
                "my open tickets",
                "tickets that need attention",
                "tickets",
                "current tickets",
            ],
            keywords: &["ticket"],
            personas: Scope::All,
            modes: Scope::All,
            priority: 20,
            response: "Here's the current ticket queue.",
        },
        PatternSpec {
            id: "draft-response",
            widget: "response-composer",
            phrases: &[
                "draft response",
                "draft a response",
                "draft response about the outage",
                "help me respond",
                "compose response",
            ],
            keywords: &["draft", "response"],
            personas: Scope::All,
            modes: Scope::All,
            priority: 20,
            response: "I've drafted a response for your review.",
        },
        // "Top performers" is the agent comparison for every role except
        // customer success, where it means account health. The inverse
        // "who is slacking" question lands on the team workload view.
        PatternSpec {
            id: "top-performers",
            widget: "agent-performance-comparison",
            phrases: &[
                "who are my top performers",
                "top performers",
                "best performers",
                "top performing agents",
                "who is top performing agent",
                "top performing agent",
                "best agent",
                "performance comparison",
                "performance ranking",
                "bottom performers",
            ],
            keywords: &["topperformers"],
            personas: Scope::only([
                "cor",
                "program-manager",
                "stakeholder-lead",
                "project-manager",
                "service-team-lead",
                "service-team-member",
                "atc-executive",
                "atc-manager",
                "atc-support",
                "c-level",
                "cs-manager",
                "support-agent",
            ]),
            modes: Scope::All,
            priority: 30,
            response: "Here's how your agents compare, top to bottom.",
        },
        PatternSpec {
            id: "top-performers-accounts",
            widget: "customer-risk-list",
            phrases: &[
                "who are my top performers",
                "top performers",
                "top performing customer accounts",
            ],
            keywords: &["topperformers"],
            personas: Scope::only(["atc-csm"]),
            modes: Scope::All,
            priority: 30,
            response: "Here are your top-performing customer accounts.",
        },
        PatternSpec {
            id: "slacking-agent",
            widget: "team-workload-dashboard",
            phrases: &[
                "who is most slacking",
                "who is most slacking agent",
                "slacking agent",
                "underperforming agent",
                "who is underperforming",
                "weakest performer",
                "lowest performer",
                "struggling agents",
            ],
            keywords: &["slacking"],
            personas: Scope::All,
            modes: Scope::All,
            priority: 30,
            response: "Here's the workload view with the agents who are falling behind.",
        },
        // Government contract management.
        PatternSpec {
            id: "contract-performance",
            widget: "contract-performance-dashboard",
            phrases: &[
                "contract status",
                "contract performance",
                "contract performance dashboard",
                "budget status",
            ],
            keywords: &["contract"],
            personas: Scope::only(["cor"]),
            modes: Scope::only([MODE_GOVERNMENT]),
            priority: 50,
            response: "Here's the contract performance dashboard.",
        },
        PatternSpec {
            id: "deliverable-reviews",
            widget: "deliverable-review-list",
            phrases: &[
                "deliverable reviews",
                "pending deliverable reviews",
                "pending deliverables",
                "deliverables due this month",
                "deliverables due",
                "deliverable status",
            ],
            keywords: &["deliverablereview"],
            personas: Scope::only(["cor"]),
            modes: Scope::only([MODE_GOVERNMENT]),
            priority: 50,
            response: "Here are the deliverables awaiting review.",
        },
        PatternSpec {
            id: "vendor-compliance",
            widget: "vendor-compliance-dashboard",
            phrases: &[
                "vendor compliance",
                "sla compliance",
                "vendor compliance dashboard",
                "vendor performance",
                "vendor metrics",
            ],
            keywords: &["vendorcompliance"],
            personas: Scope::only(["cor"]),
            modes: Scope::only([MODE_GOVERNMENT]),
            priority: 50,
            response: "Here's the vendor compliance picture.",
        },
        // Registered after contract-performance: for a COR, bare "budget
        // status" stays on the contract dashboard via the order tie-break.
        PatternSpec {
            id: "budget-utilization",
            widget: "budget-utilization-dashboard",
            phrases: &[
                "budget utilization",
                "budget tracking",
                "budget tracking dashboard",
                "budget burn rate",
                "budget remaining",
                "remaining funds",
                "budget dashboard",
                "budget analysis",
            ],
            keywords: &["budget"],
            personas: Scope::only(["cor", "program-manager"]),
            modes: Scope::only([MODE_GOVERNMENT]),
            priority: 50,
            response: "Here's budget utilization across the contract.",
        },
        PatternSpec {
            id: "milestone-tracking",
            widget: "milestone-tracking-dashboard",
            phrases: &[
                "milestone status",
                "milestone tracking",
                "milestone progress",
                "milestones",
                "upcoming milestones",
                "key milestones",
                "milestone dashboard",
                "milestone timeline",
            ],
            keywords: &["milestone"],
            personas: Scope::only(["program-manager"]),
            modes: Scope::only([MODE_GOVERNMENT]),
            priority: 50,
            response: "Here's where the program milestones stand.",
        },
        PatternSpec {
            id: "risk-register",
            widget: "risk-register-dashboard",
            phrases: &[
                "risk register",
                "program risks",
                "active risks",
                "critical risk",
                "critical risks",
                "top risks",
                "high risks",
                "risk assessment",
                "risk mitigation",
                "risk dashboard",
            ],
            keywords: &["risk"],
            personas: Scope::only(["program-manager"]),
            modes: Scope::only([MODE_GOVERNMENT]),
            priority: 50,
            response: "Here's the risk register, highest severity first.",
        },
        PatternSpec {
            id: "sprint-burndown",
            widget: "sprint-burndown-chart",
            phrases: &[
                "sprint burndown",
                "burndown",
                "burndown chart",
                "burn down chart",
                "sprint progress",
            ],
            keywords: &["sprintburndown"],
            personas: Scope::only(["program-manager", "project-manager"]),
            modes: Scope::only([MODE_GOVERNMENT, MODE_PROJECT]),
            priority: 50,
            response: "Here's the current sprint burndown.",
        },
        PatternSpec {
            id: "program-health",
            widget: "program-health-dashboard",
            phrases: &[
                "program health",
                "program health dashboard",
                "program overview",
                "program status",
                "how is the program doing",
            ],
            keywords: &["programhealth"],
            personas: Scope::only(["program-manager"]),
            modes: Scope::only([MODE_GOVERNMENT]),
            priority: 50,
            response: "Here's the overall program health.",
        },
        PatternSpec {
            id: "resource-capacity",
            widget: "resource-capacity-dashboard",
            phrases: &["resource capacity", "resource allocation"],
            keywords: &["resourcecapacity"],
            personas: Scope::only(["program-manager", "project-manager"]),
            modes: Scope::only([MODE_GOVERNMENT, MODE_PROJECT]),
            priority: 50,
            response: "Here's the team's resource capacity.",
        },
        PatternSpec {
            id: "stakeholder-engagement",
            widget: "stakeholder-engagement-dashboard",
            phrases: &[
                "stakeholder engagement",
                "stakeholder engagement dashboard",
                "stakeholder status",
                "impact analysis",
                "change impact",
            ],
            keywords: &["stakeholderengagement"],
            personas: Scope::only(["stakeholder-lead", "program-manager"]),
            modes: Scope::only([MODE_GOVERNMENT]),
            priority: 50,
            response: "Here's the latest stakeholder engagement summary.",
        },
        PatternSpec {
            id: "user-feedback",
            widget: "nps-sentiment-analysis",
            phrases: &[
                "user feedback",
                "end user feedback",
                "feedback summary",
                "feedback trends",
                "user satisfaction",
            ],
            keywords: &["feedback"],
            personas: Scope::only(["stakeholder-lead"]),
            modes: Scope::only([MODE_GOVERNMENT]),
            priority: 50,
            response: "Here's what end users are saying, by sentiment.",
        },
        PatternSpec {
            id: "requirements-tracking",
            widget: "requirements-tracking-dashboard",
            phrases: &["requirements tracking", "requirements tracking dashboard"],
            keywords: &["requirementstracking"],
            personas: Scope::only(["stakeholder-lead"]),
            modes: Scope::only([MODE_GOVERNMENT]),
            priority: 50,
            response: "Here's where requirements stand.",
        },
        PatternSpec {
            id: "change-requests",
            widget: "change-request-dashboard",
            phrases: &["change requests", "scope changes", "open change requests"],
            keywords: &["changerequest"],
            personas: Scope::only(["stakeholder-lead", "program-manager", "project-manager"]),
            modes: Scope::only([MODE_GOVERNMENT, MODE_PROJECT]),
            priority: 50,
            response: "Here are the open change requests.",
        },
        PatternSpec {
            id: "meeting-scheduler",
            widget: "meeting-scheduler",
            phrases: &[
                "upcoming meetings",
                "schedule a meeting",
                "book a meeting",
                "schedule call",
                "schedule executive call",
                "business review",
            ],
            keywords: &["schedule"],
            personas: Scope::only(["stakeholder-lead", "atc-csm", "c-level"]),
            modes: Scope::All,
            priority: 50,
            response: "Here's the scheduler — pick a slot that works.",
        },
        // Project delivery.
        PatternSpec {
            id: "team-workload",
            widget: "team-workload-dashboard",
            phrases: &[
                "team workload",
                "team status",
                "my teams status",
                "how is my team",
                "good morning how is my team",
            ],
            keywords: &["teamworkload"],
            personas: Scope::only(["service-team-lead", "atc-manager", "cs-manager"]),
            modes: Scope::only([MODE_PROJECT, MODE_ATC]),
            priority: 50,
            response: "Here's how the team's workload is distributed today.",
        },
        PatternSpec {
            id: "code-quality",
            widget: "code-quality-dashboard",
            phrases: &[
                "code quality",
                "code quality metrics",
                "technical debt",
                "test coverage",
            ],
            keywords: &["codequality"],
            personas: Scope::only(["service-team-lead", "service-team-member"]),
            modes: Scope::only([MODE_PROJECT]),
            priority: 50,
            response: "Here are the current code quality metrics.",
        },
        PatternSpec {
            id: "code-reviews",
            widget: "code-review-dashboard",
            phrases: &[
                "code reviews",
                "pending code reviews",
                "code review queue",
                "pr reviews",
                "pull request reviews",
                "pending prs",
                "pull requests",
                "my reviews",
            ],
            keywords: &["reviews"],
            personas: Scope::only(["service-team-lead", "service-team-member"]),
            modes: Scope::only([MODE_PROJECT]),
            priority: 50,
            response: "Here's the code review queue.",
        },
        PatternSpec {
            id: "deployment-pipeline",
            widget: "deployment-pipeline-dashboard",
            phrases: &[
                "deployment pipeline",
                "deployment pipeline status",
                "deployment status",
                "pipeline status",
                "cicd pipeline",
                "build status",
                "recent deployments",
            ],
            keywords: &["deploymentpipeline"],
            personas: Scope::only(["service-team-lead", "service-team-member"]),
            modes: Scope::only([MODE_PROJECT]),
            priority: 50,
            response: "Here's the deployment pipeline status.",
        },
        PatternSpec {
            id: "dora-metrics",
            widget: "dora-metrics-dashboard",
            phrases: &["dora metrics"],
            keywords: &["dorametrics"],
            personas: Scope::only(["service-team-lead"]),
            modes: Scope::only([MODE_PROJECT]),
            priority: 50,
            response: "Here are the team's DORA metrics.",
        },
        PatternSpec {
            id: "blocker-resolution",
            widget: "blocker-resolution-dashboard",
            phrases: &["blockers", "blocker resolution", "current blockers"],
            keywords: &["blocker"],
            personas: Scope::only(["project-manager", "service-team-lead"]),
            modes: Scope::only([MODE_PROJECT]),
            priority: 50,
            response: "Here are the active blockers and who owns them.",
        },
        PatternSpec {
            id: "team-velocity",
            widget: "team-velocity-dashboard",
            phrases: &["team velocity", "velocity trend"],
            keywords: &["teamvelocity"],
            personas: Scope::only(["project-manager"]),
            modes: Scope::only([MODE_PROJECT]),
            priority: 50,
            response: "Here's the velocity trend over recent sprints.",
        },
        PatternSpec {
            id: "sprint-planning-board",
            widget: "task-kanban-board",
            phrases: &[
                "sprint planning",
                "kanban board",
                "task kanban",
                "sprint planning board",
                "sprint tasks",
                "my sprint tasks",
                "task board",
                "backlog",
                "upcoming tasks",
                "assigned tasks",
            ],
            keywords: &["kanban"],
            personas: Scope::only(["project-manager", "service-team-lead", "service-team-member"]),
            modes: Scope::only([MODE_PROJECT]),
            priority: 50,
            response: "Here's the sprint planning board.",
        },
        PatternSpec {
            id: "agent-daily-dashboard",
            widget: "agent-dashboard",
            phrases: &[
                "daily update",
                "my tasks",
                "good morning",
                "whats on my plate today",
                "what is on my plate today",
                "my plate today",
                "my assigned requests",
            ],
            keywords: &["dailyupdate"],
            personas: Scope::only(["service-team-member", "atc-support", "support-agent"]),
            modes: Scope::only([MODE_PROJECT, MODE_ATC]),
            priority: 50,
            response: "Good morning — here's what's on your plate today.",
        },
        PatternSpec {
            id: "my-performance-stats",
            widget: "agent-performance-stats",
            phrases: &[
                "my dashboard",
                "my performance",
                "my stats",
                "my performance stats",
                "performance stats",
            ],
            keywords: &["mystats"],
            personas: Scope::only(["service-team-member", "atc-support", "support-agent"]),
            modes: Scope::only([MODE_PROJECT, MODE_ATC]),
            priority: 50,
            response: "Here are your performance stats against the team benchmarks.",
        },
        // ATC customer support.
        PatternSpec {
            id: "executive-summary",
            widget: "executive-summary",
            phrases: &[
                "executive summary",
                "executive overview",
                "good morning show me the summary",
                "show me the summary",
                "system health",
            ],
            keywords: &["executivesummary"],
            personas: Scope::only(["atc-executive", "c-level"]),
            modes: Scope::only([MODE_ATC]),
            priority: 50,
            response: "Here's your executive summary for today.",
        },
        PatternSpec {
            id: "analytics-dashboard",
            widget: "analytics-dashboard",
            phrases: &[
                "analytics dashboard",
                "detailed analytics",
                "product adoption",
                "upcoming renewals",
                "feature usage",
            ],
            keywords: &["analytics"],
            personas: Scope::only(["atc-executive", "atc-csm", "c-level"]),
            modes: Scope::only([MODE_ATC]),
            priority: 50,
            response: "Here's the detailed analytics dashboard.",
        },
        PatternSpec {
            id: "customer-risk-list",
            widget: "customer-risk-list",
            phrases: &[
                "at risk customers",
                "all at risk customers",
                "high risk customers",
                "customers at risk",
                "customers at churn risk",
                "customer risk",
                "expansion opportunities",
            ],
            keywords: &["atrisk"],
            personas: Scope::only([
                "atc-executive",
                "atc-manager",
                "atc-csm",
                "c-level",
                "cs-manager",
            ]),
            modes: Scope::only([MODE_ATC]),
            priority: 50,
            response: "Here are the accounts that need attention first.",
        },
        PatternSpec {
            id: "customer-risk-profile",
            widget: "customer-risk-profile",
            phrases: &[
                "churn risk analysis",
                "customer risk profile",
                "tell me more about acme corp",
                "tell me more about enterprise customer",
                "why did acme risk increase",
            ],
            keywords: &["acme"],
            personas: Scope::only(["atc-csm", "c-level"]),
            modes: Scope::only([MODE_ATC]),
            priority: 50,
            response: "Here's the full risk profile for that account.",
        },
        PatternSpec {
            id: "sla-performance",
            widget: "sla-performance-chart",
            phrases: &[
                "sla performance",
                "sla performance breakdown",
                "sla performance chart",
                "which categories are we failing",
            ],
            keywords: &["slaperformance"],
            personas: Scope::only(["atc-executive", "c-level"]),
            modes: Scope::only([MODE_ATC]),
            priority: 50,
            response: "Here's SLA performance broken down by category.",
        },
        PatternSpec {
            id: "sentiment-analysis",
            widget: "sentiment-analysis",
            phrases: &[
                "customer sentiment",
                "sentiment analysis",
                "nps survey results",
                "nps trends",
            ],
            keywords: &["sentimentanalysis"],
            personas: Scope::only(["atc-executive", "atc-csm"]),
            modes: Scope::only([MODE_ATC]),
            priority: 50,
            response: "Here's the latest customer sentiment breakdown.",
        },
        PatternSpec {
            id: "client-health",
            widget: "client-health-dashboard",
            phrases: &["customer health", "client health", "customer health dashboard"],
            keywords: &["customerhealth"],
            personas: Scope::only(["atc-csm"]),
            modes: Scope::only([MODE_ATC]),
            priority: 50,
            response: "Here's the health overview across your book of business.",
        },
        PatternSpec {
            id: "agent-performance-comparison",
            widget: "agent-performance-comparison",
            phrases: &[
                "compare agent performance",
                "agent performance comparison",
                "performance comparison",
                "top and bottom performers",
            ],
            keywords: &["agentperformance"],
            personas: Scope::only(["atc-manager", "cs-manager"]),
            modes: Scope::only([MODE_ATC]),
            priority: 50,
            response: "Here's how your agents compare, top to bottom.",
        },
        PatternSpec {
            id: "team-budget",
            widget: "budget-utilization-dashboard",
            phrases: &[
                "team budget",
                "budget overview",
                "budget status",
                "budget allocation",
                "department budget",
            ],
            keywords: &["budget"],
            personas: Scope::only(["atc-manager", "atc-executive", "cs-manager"]),
            modes: Scope::only([MODE_ATC]),
            priority: 50,
            response: "Here's the team budget picture.",
        },
        PatternSpec {
            id: "message-composer",
            widget: "message-composer",
            phrases: &[
                "draft message for customer",
                "compose message",
                "write email",
                "write a message to customer",
            ],
            keywords: &["message"],
            personas: Scope::only(["cs-manager"]),
            modes: Scope::only([MODE_ATC]),
            priority: 50,
            response: "I've started a message draft for you.",
        },
        PatternSpec {
            id: "similar-tickets",
            widget: "similar-tickets-analysis",
            phrases: &[
                "similar tickets",
                "similar resolved tickets",
                "tickets i resolved",
                "learn the patterns",
            ],
            keywords: &["similartickets"],
            personas: Scope::only(SUPPORT_AGENTS.iter().copied()),
            modes: Scope::only([MODE_ATC]),
            priority: 50,
            response: "Here are similar tickets you've resolved before.",
        },
        PatternSpec {
            id: "call-prep",
            widget: "call-prep-notes",
            phrases: &[
                "call prep",
                "prepare for call",
                "prepare for the call",
                "help me prepare for call",
                "draft prep notes",
            ],
            keywords: &["callprep"],
            personas: Scope::only(SUPPORT_AGENTS.iter().copied()),
            modes: Scope::only([MODE_ATC]),
            priority: 50,
            response: "Here are your prep notes for the call.",
        },
        PatternSpec {
            id: "knowledge-base-search",
            widget: "knowledge-base-search",
            phrases: &[
                "knowledge base",
                "knowledge base search",
                "search kb",
                "how to reset password",
                "troubleshoot network issues",
                "how do i troubleshoot network issues",
            ],
            keywords: &["knowledgebase"],
            personas: Scope::only(SUPPORT_AGENTS.iter().copied()),
            modes: Scope::only([MODE_ATC]),
            priority: 50,
            response: "Here's what the knowledge base has on that.",
        },
        PatternSpec {
            id: "password-reset-article",
            widget: "knowledge-article",
            phrases: &[
                "password reset",
                "i need password reset",
                "locked out of account",
                "password lock",
            ],
            keywords: &["passwordreset"],
            personas: Scope::only(SUPPORT_AGENTS.iter().copied()),
            modes: Scope::only([MODE_ATC]),
            priority: 50,
            response: "Here's the standard password reset article.",
        },
        PatternSpec {
            id: "escalation-path",
            widget: "escalation-path",
            phrases: &[
                "still unable to reset",
                "still cant reset",
                "not working",
                "didnt work",
                "escalate this issue",
            ],
            keywords: &["escalate"],
            personas: Scope::only(SUPPORT_AGENTS.iter().copied()),
            modes: Scope::only([MODE_ATC]),
            priority: 50,
            response: "That warrants an escalation — here's the path.",
        },
        PatternSpec {
            id: "account-unlock",
            widget: "response-composer",
            phrases: &[
                "unlock my account",
                "account locked",
                "account is locked",
                "cant access account",
                "cant access my account",
            ],
            keywords: &["unlock"],
            personas: Scope::only(SUPPORT_AGENTS.iter().copied()),
            modes: Scope::only([MODE_ATC]),
            priority: 50,
            response: "I've drafted an account unlock response for you.",
        },
        PatternSpec {
            id: "system-access-status",
            widget: "system-access-status",
            phrases: &[
                "cant access sharepoint and slack",
                "access to sharepoint slack and email",
                "multiple systems not working",
                "system access status",
            ],
            keywords: &["sharepoint"],
            personas: Scope::only(SUPPORT_AGENTS.iter().copied()),
            modes: Scope::only([MODE_ATC]),
            priority: 50,
            response: "Here's the access status across the affected systems.",
        },
    ];

    let patterns = specs.into_iter().map(PatternSpec::build).collect();
    (patterns, personas)
}
