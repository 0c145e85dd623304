//! Section Templates
//!
//! Canned bodies for sections the repair tool can insert. The validator
//! itself never mutates documents; it only reports which sections are
//! missing. Insertion goes immediately before the Boundaries heading, or
//! to the end of the document when there is none.

/// Sections with an available template, in repair order
pub const TEMPLATED_SECTIONS: &[&str] = &[
    "Usage",
    "MCP Integration",
    "Tool Coordination",
    "Key Patterns",
    "Examples",
];

const MCP_INTEGRATION_TEMPLATE: &str = r#"
## MCP Integration

### Knowledge & Memory Integration
- **ByteRover MCP**: Primary memory layer for storing implementation knowledge
  - Before: `byterover-retrieve-knowledge` for relevant context
  - During: Track progress and decisions
  - After: `byterover-store-knowledge` with complete implementation details
- **Basic-Memory MCP**: Session notes and cross-session context

### Workflow Integration (per AGENTS.md)
```
Before Command:
  → byterover-retrieve-knowledge(query="relevant context")

During Command:
  → Track decisions and progress
  → Document key findings

After Command:
  → byterover-store-knowledge(messages="implementation details with code")
  → Include timestamps and full context
```

### Tool Coordination
- **Analysis & Research**: Sequential-thinking, Exa, Context7 for deep investigation
- **Development**: Morphllm, Serena for code changes and project memory
- **Documentation**: Ref, Context7 for framework-specific docs
"#;

const TOOL_COORDINATION_TEMPLATE: &str = r#"
## Tool Coordination
- **Read/Write/Edit**: File operations and content management
- **TodoWrite**: Progress tracking for multi-step operations
- **Task**: Parallel execution and delegation
- **WebSearch**: Research and external information gathering
"#;

const KEY_PATTERNS_TEMPLATE: &str = r#"
## Key Patterns
- **Systematic Execution**: Structured approach → comprehensive results
- **Memory Integration**: ByteRover retrieve → process → store pattern
- **Progressive Enhancement**: Iterative refinement with persistent context
- **Cross-Session Continuity**: Serena MCP for long-running operations
"#;

const USAGE_TEMPLATE: &str = r#"
## Usage
```
/sc:command [options] [arguments]
```
**Usage**: Type this pattern in your Claude Code conversation to activate this command's behavioral mode.
"#;

const EXAMPLES_TEMPLATE: &str = r#"
## Examples

### Basic Usage
```
/sc:command "basic example"
```

### Advanced Usage
```
/sc:command "advanced example" --with-options
```

### Complex Scenario
```
/sc:command "complex multi-step example" --comprehensive
```
"#;

/// Look up the canned body for a section name
pub fn template_for(section: &str) -> Option<&'static str> {
    match section {
        "MCP Integration" => Some(MCP_INTEGRATION_TEMPLATE),
        "Tool Coordination" => Some(TOOL_COORDINATION_TEMPLATE),
        "Key Patterns" => Some(KEY_PATTERNS_TEMPLATE),
        "Usage" => Some(USAGE_TEMPLATE),
        "Examples" => Some(EXAMPLES_TEMPLATE),
        _ => None,
    }
}

/// Insert a templated section before the `## Boundaries` heading, or
/// append it when the document has no Boundaries section.
///
/// Returns `None` for sections without a template.
pub fn insert_section(content: &str, section: &str) -> Option<String> {
    let template = template_for(section)?;

    let boundaries_pos = content
        .lines()
        .scan(0usize, |offset, line| {
            let start = *offset;
            *offset += line.len() + 1;
            Some((start, line))
        })
        .find(|(_, line)| line.starts_with("## Boundaries"))
        .map(|(start, _)| start);

    let updated = match boundaries_pos {
        Some(pos) => {
            let mut updated = String::with_capacity(content.len() + template.len() + 2);
            updated.push_str(&content[..pos]);
            updated.push_str(template);
            updated.push_str("\n\n");
            updated.push_str(&content[pos..]);
            updated
        }
        None => {
            let mut updated = String::with_capacity(content.len() + template.len() + 2);
            updated.push_str(content);
            updated.push_str("\n\n");
            updated.push_str(template);
            updated
        }
    };

    Some(updated)
}
