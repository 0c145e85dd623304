//! Documentation Schema
//!
//! Closed value sets the validator checks against. These are fixed at
//! compile time; the error messages that enumerate valid values depend on
//! the ordering here staying stable.

/// Valid values for the `category` front matter field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Workflow,
    Analysis,
    Documentation,
    Session,
    Utility,
    Command,
    Orchestration,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Workflow,
        Category::Analysis,
        Category::Documentation,
        Category::Session,
        Category::Utility,
        Category::Command,
        Category::Orchestration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Workflow => "workflow",
            Category::Analysis => "analysis",
            Category::Documentation => "documentation",
            Category::Session => "session",
            Category::Utility => "utility",
            Category::Command => "command",
            Category::Orchestration => "orchestration",
        }
    }

    pub fn from_str(value: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.as_str() == value)
    }

    /// Comma-joined list of valid values, in declaration order
    pub fn valid_values() -> String {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        names.join(", ")
    }
}

/// Valid values for the `complexity` front matter field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Low,
    Basic,
    Standard,
    Advanced,
}

impl Complexity {
    pub const ALL: [Complexity; 4] = [
        Complexity::Low,
        Complexity::Basic,
        Complexity::Standard,
        Complexity::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Basic => "basic",
            Complexity::Standard => "standard",
            Complexity::Advanced => "advanced",
        }
    }

    pub fn from_str(value: &str) -> Option<Complexity> {
        Complexity::ALL.iter().copied().find(|c| c.as_str() == value)
    }

    pub fn valid_values() -> String {
        let names: Vec<&str> = Complexity::ALL.iter().map(|c| c.as_str()).collect();
        names.join(", ")
    }
}

/// MCP servers documented by the framework
pub const KNOWN_MCP_SERVERS: &[&str] = &[
    "zen",
    "ref",
    "firecrawl",
    "exa",
    "byterover",
    "basic-memory",
    "sequential-thinking",
    "tavily",
    "context7",
    "octocode",
    "cerebras-code",
    "morphllm-fast-apply",
    "time",
    "serena",
    "magic",
    "playwright",
];

/// Core servers every command is expected to declare
pub const CORE_MCP_SERVERS: &[&str] = &["byterover", "basic-memory", "serena", "time"];

/// Personas defined in the Agents directory
pub const KNOWN_PERSONAS: &[&str] = &[
    "architect",
    "frontend",
    "backend",
    "security",
    "qa-specialist",
    "devops",
    "analyzer",
    "project-manager",
    "deep-research-agent",
    "mentor",
    "technical-writer",
    "system-architect",
    "quality-engineer",
    "performance-engineer",
    "security-engineer",
];

/// Sections every command document must contain, as `##` headings
pub const REQUIRED_SECTIONS: &[&str] = &[
    "Triggers",
    "Usage",
    "Behavioral Flow",
    "MCP Integration",
    "Tool Coordination",
    "Key Patterns",
    "Examples",
    "Boundaries",
];
