use crate::escape::escape_html;

/// Split raw instructions into trimmed, non-empty lines.
pub fn instruction_steps(instructions: Option<&str>) -> Vec<String> {
    instructions
        .unwrap_or_default()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Render one escaped paragraph per instruction step.
pub fn format_instructions(instructions: Option<&str>) -> String {
    format_steps(&instruction_steps(instructions))
}

pub(crate) fn format_steps(steps: &[String]) -> String {
    steps
        .iter()
        .map(|step| {
            format!(
                r#"<p class="meal__instruction-step">{}</p>"#,
                escape_html(step)
            )
        })
        .collect()
}
