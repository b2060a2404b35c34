//! Color themes.

use crate::fb::{Rgb, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Resolved styles for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub alive: Style,
    pub dead: Style,
    pub border: Style,
    pub status: Style,
    pub message: Style,
    pub background: Style,
}

impl Theme {
    pub fn next(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => {
                let field = Rgb::new(30, 30, 40);
                let screen = Rgb::new(0, 0, 0);
                Palette {
                    alive: Style::new(Rgb::new(100, 220, 120), field).bold(),
                    dead: Style::new(Rgb::new(90, 90, 100), field).dim(),
                    border: Style::new(Rgb::new(200, 200, 200), screen),
                    status: Style::new(Rgb::new(220, 220, 220), screen).bold(),
                    message: Style::new(Rgb::new(240, 200, 80), screen),
                    background: Style::new(Rgb::new(220, 220, 220), screen),
                }
            }
            Theme::Light => {
                let field = Rgb::new(250, 250, 250);
                let screen = Rgb::new(235, 235, 235);
                Palette {
                    alive: Style::new(Rgb::new(20, 20, 20), field).bold(),
                    dead: Style::new(Rgb::new(190, 190, 190), field),
                    border: Style::new(Rgb::new(120, 120, 120), screen),
                    status: Style::new(Rgb::new(20, 20, 20), screen).bold(),
                    message: Style::new(Rgb::new(160, 60, 20), screen),
                    background: Style::new(Rgb::new(20, 20, 20), screen),
                }
            }
        }
    }
}
