use colored::*;
use std::fmt;

pub const SEPARATOR_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Done,
    Skipped,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub status: Status,
    pub text: String,
}

impl Line {
    pub fn done(text: String) -> Self {
        Line {
            status: Status::Done,
            text,
        }
    }

    pub fn skipped(text: String) -> Self {
        Line {
            status: Status::Skipped,
            text,
        }
    }

    pub fn failed(text: String) -> Self {
        Line {
            status: Status::Failed,
            text,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self.status {
            Status::Done => "✓".green(),
            Status::Skipped => "⊘".yellow(),
            Status::Failed => "✗".red(),
        };
        write!(f, "{} {}", symbol, self.text)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Report {
    pub lines: Vec<Line>,
}

impl Report {
    pub fn new() -> Self {
        Report::default()
    }

    pub fn done(&mut self, text: String) {
        self.push(Line::done(text));
    }

    pub fn skipped(&mut self, text: String) {
        self.push(Line::skipped(text));
    }

    pub fn failed(&mut self, text: String) {
        self.push(Line::failed(text));
    }

    pub fn failures(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| line.status == Status::Failed)
            .count()
    }

    fn push(&mut self, line: Line) {
        println!("{}", line);
        self.lines.push(line);
    }
}

pub fn separator() {
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
}
