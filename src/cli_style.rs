/*!
 * netemu CLI Style System
 *
 * Styling utilities for consistent CLI output: themed text, status messages
 * and the tables used to show sessions, topology and configuration.
 */

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use console::{style, StyledObject};
use netemu_connect::model::{
    ConfigGroup, Hook, Link, LocationConfig, Node, Position, ServiceGroups, SessionState,
    SessionSummary,
};

// ============================================================================
// THEME COLORS
// ============================================================================

pub struct Theme;

impl Theme {
    /// Primary accent color (cyan)
    pub fn primary<D: std::fmt::Display>(text: D) -> StyledObject<D> {
        style(text).cyan()
    }

    pub fn success<D: std::fmt::Display>(text: D) -> StyledObject<D> {
        style(text).green()
    }

    pub fn warning<D: std::fmt::Display>(text: D) -> StyledObject<D> {
        style(text).yellow()
    }

    pub fn error<D: std::fmt::Display>(text: D) -> StyledObject<D> {
        style(text).red()
    }

    /// Muted/secondary text (dim)
    pub fn muted<D: std::fmt::Display>(text: D) -> StyledObject<D> {
        style(text).dim()
    }

    /// Header style (bold cyan)
    pub fn header<D: std::fmt::Display>(text: D) -> StyledObject<D> {
        style(text).cyan().bold()
    }
}

// ============================================================================
// ICONS
// ============================================================================

pub struct Icons;

impl Icons {
    pub const SUCCESS: &'static str = "✓";
    pub const ERROR: &'static str = "✗";
    pub const WARNING: &'static str = "⚠";
    pub const INFO: &'static str = "ℹ";
    pub const ARROW_RIGHT: &'static str = "→";
}

/// Draw a section header with a line
pub fn section_header(title: &str) {
    let line_len = 50 - title.len().min(40);
    println!(
        "\n{} {}",
        Theme::header(title),
        Theme::muted("─".repeat(line_len))
    );
}

// ============================================================================
// TABLES
// ============================================================================

/// Create a styled data table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Create a minimal table (no outer borders)
pub fn create_minimal_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_NO_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cells(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|title| {
            Cell::new(title)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold)
        })
        .collect()
}

/// Key-value table
pub fn stats_table(items: &[(&str, String)]) -> Table {
    let mut table = create_minimal_table();

    for (key, value) in items {
        table.add_row(vec![
            Cell::new(key).fg(Color::Cyan),
            Cell::new(value)
                .fg(Color::White)
                .add_attribute(Attribute::Bold),
        ]);
    }

    table
}

pub fn sessions_table(sessions: &[SessionSummary]) -> Table {
    let mut table = create_table();
    table.set_header(header_cells(&["Session", "State", "Nodes"]));

    for session in sessions {
        table.add_row(vec![
            Cell::new(session.id)
                .fg(Color::White)
                .add_attribute(Attribute::Bold),
            state_cell(session.state),
            Cell::new(session.node_count),
        ]);
    }

    table
}

pub fn nodes_table(nodes: &[Node]) -> Table {
    let mut table = create_table();
    table.set_header(header_cells(&["Id", "Name", "Type", "Model", "Position", "Services"]));

    for node in nodes {
        let services: Vec<&str> = node.services.iter().map(String::as_str).collect();
        table.add_row(vec![
            Cell::new(optional(node.id)),
            Cell::new(node.name.as_deref().unwrap_or("-")),
            Cell::new(node.node_type),
            Cell::new(node.model.as_deref().unwrap_or("-")).fg(Color::DarkGrey),
            Cell::new(position_cell(node.position)),
            Cell::new(services.join(" ")).fg(Color::DarkGrey),
        ]);
    }

    table
}

pub fn links_table(links: &[Link]) -> Table {
    let mut table = create_table();
    table.set_header(header_cells(&["Node 1", "Node 2", "Addresses", "Options"]));

    for link in links {
        let addresses = [&link.interface_one, &link.interface_two]
            .iter()
            .map(|iface| {
                iface
                    .as_ref()
                    .and_then(|iface| {
                        iface
                            .ip4
                            .as_ref()
                            .map(|ip| format!("{}/{}", ip, optional(iface.ip4_mask)))
                    })
                    .unwrap_or_else(|| "-".to_string())
            })
            .collect::<Vec<_>>()
            .join(" ↔ ");

        table.add_row(vec![
            Cell::new(optional(link.node_one)),
            Cell::new(optional(link.node_two)),
            Cell::new(addresses),
            Cell::new(link_options_summary(link)).fg(Color::DarkGrey),
        ]);
    }

    table
}

pub fn hooks_table(hooks: &[Hook]) -> Table {
    let mut table = create_table();
    table.set_header(header_cells(&["State", "File", "Lines"]));

    for hook in hooks {
        table.add_row(vec![
            Cell::new(hook.state),
            Cell::new(&hook.file),
            Cell::new(hook.data.lines().count()),
        ]);
    }

    table
}

pub fn service_groups_table(groups: &ServiceGroups) -> Table {
    let mut table = create_table();
    table.set_header(header_cells(&["Group", "Services"]));

    for (group, services) in groups {
        table.add_row(vec![
            Cell::new(group)
                .fg(Color::White)
                .add_attribute(Attribute::Bold),
            Cell::new(services.join(", ")),
        ]);
    }

    table
}

pub fn config_groups_table(groups: &[ConfigGroup]) -> Table {
    let mut table = create_table();
    table.set_header(header_cells(&["Group", "Option", "Value", "Label"]));

    for group in groups {
        for option in &group.options {
            table.add_row(vec![
                Cell::new(&group.name).fg(Color::DarkGrey),
                Cell::new(&option.name),
                Cell::new(&option.value)
                    .fg(Color::White)
                    .add_attribute(Attribute::Bold),
                Cell::new(&option.label).fg(Color::DarkGrey),
            ]);
        }
    }

    table
}

pub fn location_table(location: &LocationConfig) -> Table {
    stats_table(&[
        ("Scale", optional(location.scale)),
        (
            "Canvas",
            format!(
                "{}, {}, {}",
                optional(location.position.x),
                optional(location.position.y),
                optional(location.position.z)
            ),
        ),
        ("Latitude", optional(location.location.latitude)),
        ("Longitude", optional(location.location.longitude)),
        ("Altitude", optional(location.location.altitude)),
    ])
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn state_cell(state: SessionState) -> Cell {
    if state == SessionState::Runtime {
        Cell::new(format!("{} {}", Icons::SUCCESS, state)).fg(Color::Green)
    } else {
        Cell::new(state).fg(Color::Yellow)
    }
}

/// Render an unset value as `-`
fn position_cell(position: Option<Position>) -> String {
    match position {
        Some(Position {
            x: Some(x),
            y: Some(y),
        }) => format!("{:.0}, {:.0}", x, y),
        Some(position) => format!("{}, {}", optional(position.x), optional(position.y)),
        None => "-".to_string(),
    }
}

pub fn optional<T: std::fmt::Display>(value: Option<T>) -> String {
    value
        .map(|value| value.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn link_options_summary(link: &Link) -> String {
    let Some(options) = &link.options else {
        return String::new();
    };

    [
        ("bw", options.bandwidth),
        ("delay", options.delay),
        ("jitter", options.jitter),
        ("loss", options.per),
        ("dup", options.dup),
    ]
    .iter()
    .filter_map(|(name, value)| value.map(|value| format!("{}={}", name, value)))
    .collect::<Vec<_>>()
    .join(" ")
}

/// Print a styled error message with optional suggestion
pub fn print_error(message: &str, suggestion: Option<&str>) {
    eprintln!(
        "\n{} {}",
        Theme::error(format!("{} Error:", Icons::ERROR)),
        message
    );

    if let Some(hint) = suggestion {
        eprintln!(
            "  {} {}",
            Theme::muted(Icons::ARROW_RIGHT),
            Theme::muted(hint)
        );
    }
    eprintln!();
}

pub fn print_warning(message: &str) {
    eprintln!(
        "{} {}",
        Theme::warning(Icons::WARNING.to_string()),
        Theme::warning(message)
    );
}

pub fn print_success(message: &str) {
    println!(
        "{} {}",
        Theme::success(Icons::SUCCESS.to_string()),
        Theme::success(message)
    );
}

pub fn print_info(message: &str) {
    println!("{} {}", Theme::primary(Icons::INFO.to_string()), message);
}

// ============================================================================
// TESTS
// ============================================================================
