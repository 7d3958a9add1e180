//! Command-line configuration.
//!
//! Values given here override the preferences restored from storage.

use clap::Parser;

use crate::state::SidebarTab;

/// Visual design sidebar
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "designbar-gui", version, about)]
pub struct Args {
    /// Sidebar tab shown on startup
    #[arg(long, value_enum)]
    pub tab: Option<SidebarTab>,

    /// Theme name, e.g. "Dracula" (overrides the saved preference)
    #[arg(long)]
    pub theme: Option<String>,

    /// Layer id to select on startup
    #[arg(long, value_name = "LAYER_ID")]
    pub select: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_all_flags() {
        let args = Args::try_parse_from([
            "designbar-gui",
            "--tab",
            "layers",
            "--theme",
            "Dracula",
            "--select",
            "8",
        ])
        .unwrap();
        assert_eq!(args.tab, Some(SidebarTab::Layers));
        assert_eq!(args.theme.as_deref(), Some("Dracula"));
        assert_eq!(args.select.as_deref(), Some("8"));
    }

    #[test]
    fn test_rejects_unknown_tab() {
        assert!(Args::try_parse_from(["designbar-gui", "--tab", "canvas"]).is_err());
    }
}
