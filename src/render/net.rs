use std::fmt::{self, Display, Formatter};

use owo_colors::OwoColorize;

use crate::core::{Color, CubeState, Face, FaceId};
use crate::driver::Trajectory;

const MIDDLE_ROW: [FaceId; 4] = [FaceId::L, FaceId::F, FaceId::R, FaceId::B];

/// Renders cubes as unfolded text nets.
#[derive(Clone, Copy, Debug, Default)]
pub struct NetRenderer {
    colored: bool,
}

impl NetRenderer {
    /// Plain renderer: one symbol per cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint each cell with an ANSI background matching its color.
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Render one cube.
    pub fn render(&self, cube: &CubeState) -> String {
        Net {
            cube,
            colored: self.colored,
        }
        .to_string()
    }

    /// Render every snapshot of a trajectory under a `Step i` header.
    pub fn render_trajectory(&self, trajectory: &Trajectory) -> String {
        let mut out = String::new();
        for snap in trajectory.iter() {
            match snap.applied {
                Some(m) => out.push_str(&format!("Step {} ({m})\n", snap.index)),
                None => out.push_str(&format!("Step {}\n", snap.index)),
            }
            out.push_str(&self.render(&snap.cube));
            out.push('\n');
        }
        out
    }
}

struct Net<'a> {
    cube: &'a CubeState,
    colored: bool,
}

impl Net<'_> {
    fn cell(&self, f: &mut Formatter<'_>, color: Color) -> fmt::Result {
        if !self.colored {
            return write!(f, "{}", color.symbol());
        }
        let symbol = color.symbol();
        let s = symbol.black();
        match color {
            Color::White => write!(f, "{}", s.on_white()),
            Color::Yellow => write!(f, "{}", s.on_yellow()),
            Color::Green => write!(f, "{}", s.on_green()),
            Color::Blue => write!(f, "{}", s.on_blue()),
            Color::Orange => write!(f, "{}", s.on_truecolor(255, 140, 0)),
            Color::Red => write!(f, "{}", s.on_red()),
        }
    }

    fn row(&self, f: &mut Formatter<'_>, face: &Face, row: usize) -> fmt::Result {
        for &color in &face[row * 3..row * 3 + 3] {
            self.cell(f, color)?;
        }
        Ok(())
    }

    fn lone_face(&self, f: &mut Formatter<'_>, face: FaceId) -> fmt::Result {
        for row in 0..3 {
            write!(f, "    ")?;
            self.row(f, self.cube.face(face), row)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for Net<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.lone_face(f, FaceId::U)?;
        for row in 0..3 {
            for (i, &face) in MIDDLE_ROW.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                self.row(f, self.cube.face(face), row)?;
            }
            writeln!(f)?;
        }
        self.lone_face(f, FaceId::D)
    }
}
