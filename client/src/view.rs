//! Terminal rendering of profiles and search state.

use owo_colors::{OwoColorize, Style};
use pokedex_profile::types::capitalize;
use pokedex_profile::{PokemonProfile, SearchState, StatEntry, Type, type_color};

const EVOLUTION_ARROW: &str = " → ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI colors
    pub color: bool,

    /// Width of a full stat bar in cells
    pub bar_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: false,
            bar_width: 30,
        }
    }
}

/// Render the result slot
pub fn render_state(state: &SearchState, options: &RenderOptions) -> String {
    match state {
        SearchState::Idle => "Enter a Pokemon name or number".to_string(),
        SearchState::Fetching { query, .. } => format!("Searching for {}...", query),
        SearchState::Error(message) if options.color => message.red().to_string(),
        SearchState::Error(message) => message.clone(),
        SearchState::Success(profile) => render_profile(profile, options),
    }
}

/// Render a profile card
pub fn render_profile(profile: &PokemonProfile, options: &RenderOptions) -> String {
    let mut lines = Vec::new();

    let title = format!("{} {}", profile.dex_number(), profile.display_name());
    if options.color {
        lines.push(title.bold().to_string());
    } else {
        lines.push(title);
    }
    if let Some(url) = &profile.image_url {
        lines.push(format!("Artwork: {}", url));
    }
    lines.push(format!(
        "Height: {} m   Weight: {} kg",
        profile.height_m, profile.weight_kg
    ));

    lines.push(String::new());
    lines.push("Types:".to_string());
    let badges: Vec<String> = profile
        .types
        .iter()
        .map(|t| type_badge(t, options))
        .collect();
    lines.push(format!("  {}", badges.join(" ")));

    lines.push(String::new());
    lines.push("Stats:".to_string());
    for stat in &profile.stats {
        lines.push(stat_line(stat, options));
    }
    lines.push(format!("  {:<16} {:>3}", "Total", profile.base_stat_total()));

    lines.push(String::new());
    lines.push("Evolution Chain:".to_string());
    let chain: Vec<String> = profile
        .evolutions
        .iter()
        .map(|step| match step.min_level {
            Some(level) => format!("{} (Lv. {})", capitalize(&step.name), level),
            None => capitalize(&step.name),
        })
        .collect();
    lines.push(format!("  {}", chain.join(EVOLUTION_ARROW)));

    lines.push(String::new());
    lines.push("Moves:".to_string());
    for entry in profile.displayed_moves() {
        lines.push(format!("  {} (Lv.{})", entry.name, entry.level));
    }

    lines.join("\n")
}

fn type_badge(name: &str, options: &RenderOptions) -> String {
    let label = match Type::from_api_name(name) {
        Some(kind) => format!(" {} ", kind.as_str()),
        None => format!(" {} ", capitalize(name)),
    };
    if !options.color {
        return format!("[{}]", label.trim());
    }

    let color = type_color(name);
    let style = Style::new()
        .white()
        .bold()
        .on_truecolor(color.r, color.g, color.b);
    label.style(style).to_string()
}

fn stat_line(stat: &StatEntry, options: &RenderOptions) -> String {
    let filled = (stat.fill_ratio() * options.bar_width as f64).round() as usize;
    let filled = filled.min(options.bar_width);
    let empty = options.bar_width - filled;

    let fill = "█".repeat(filled);
    let fill = if options.color {
        fill.blue().to_string()
    } else {
        fill
    };

    format!(
        "  {:<16} {:>3} {}{}",
        capitalize(&stat.name),
        stat.value,
        fill,
        "░".repeat(empty)
    )
}
