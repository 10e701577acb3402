use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
    for line in summary_lines(config) {
        println!("{line}");
    }
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
    let dataset = &config.dataset;
    let mut lines = vec![
        "Effective configuration:".to_string(),
        format!("  Algorithm: {}", config.algorithm),
        format!("  Target: {}", config.target),
        format!("  Delay: {} ms", config.delay.as_millis()),
    ];
    match &dataset.values {
        Some(values) => {
            let values: Vec<String> = values.iter().map(i64::to_string).collect();
            lines.push(format!("  Values: {}", values.join(", ")));
        }
        None => {
            lines.push(format!(
                "  Generated values: {} from {}..={}",
                dataset.len, dataset.min, dataset.max
            ));
            lines.push(match dataset.seed {
                Some(seed) => format!("  Seed: {seed}"),
                None => "  Seed: (random)".to_string(),
            });
        }
    }
    lines.push(format!("  UI theme: {}", config.theme_name));
    lines
}
