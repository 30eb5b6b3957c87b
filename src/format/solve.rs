use crate::solver::Solution;

/// Render a `Solution` into human-readable lines for CLI/examples.
pub fn solution_summary(solution: &Solution) -> Vec<String> {
    let mut lines = vec![
        format!("Equation: {}", solution.equation),
        format!("Degree: {}", solution.degree),
        format!("Roots ({}): {}", solution.roots.len(), solution.formatted),
    ];
    if solution.has_integer_roots() {
        lines.push("Found integer roots first!".to_string());
    }
    lines
}
