use clap::{Args, Subcommand};

use crate::store::TrackerStore;

#[derive(Args)]
pub struct ThemeCommand {
    #[command(subcommand)]
    pub command: ThemeSubcommand,
}

#[derive(Subcommand)]
pub enum ThemeSubcommand {
    /// Show the current theme
    Show,

    /// Switch between light and dark
    Toggle,
}

impl ThemeCommand {
    pub fn run(&self, store: &mut TrackerStore) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ThemeSubcommand::Show => {
                println!("Theme: {}", theme_name(store.theme_dark()));
            }
            ThemeSubcommand::Toggle => {
                let dark = store.toggle_theme()?;
                println!("Theme set to {}", theme_name(dark));
            }
        }
        Ok(())
    }
}

fn theme_name(dark: bool) -> &'static str {
    if dark {
        "dark"
    } else {
        "light"
    }
}
