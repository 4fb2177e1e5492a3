//! Module/port descriptor (`.soc_mod`) parser.
//!
//! The descriptor is an indentation-structured text with three fixed levels:
//! column 0 holds a module name, 4 spaces a port name, 6 spaces a
//! `direction: <in|out|inout>` line that governs the most recent port. Names
//! may carry a trailing colon which is stripped. Blank lines and `#` comments
//! are skipped; any other indentation is ignored.

use std::fs;
use std::io;
use std::path::Path;

const MODULE_INDENT: usize = 0;
const PORT_INDENT: usize = 4;
const DIRECTION_INDENT: usize = 6;

/// Signal direction of a port. Descriptor values are classified by their
/// first letter; anything that is not `i...` or `o...` is inout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
    InOut,
}

impl Direction {
    fn classify(value: &str) -> Self {
        match value.chars().next() {
            Some('i') => Direction::In,
            Some('o') => Direction::Out,
            _ => Direction::InOut,
        }
    }

    /// Single-letter code used on `*.PININFO` lines.
    pub fn code(self) -> char {
        match self {
            Direction::In => 'I',
            Direction::Out => 'O',
            Direction::InOut => 'B',
        }
    }
}

#[derive(Debug, Clone)]
pub struct Port {
    pub name: String,
    pub direction: Direction,
}

#[derive(Debug, Clone)]
pub struct Module {
    pub name: String,
    pub ports: Vec<Port>,
}

/// Parsed descriptor: modules in declaration order, ports in declaration
/// order within each module.
#[derive(Debug, Clone, Default)]
pub struct ModuleTable {
    modules: Vec<Module>,
}

impl ModuleTable {
    /// Parse descriptor text. Malformed lines are skipped, never fatal.
    pub fn parse(text: &str) -> Self {
        let mut modules: Vec<Module> = Vec::new();
        // Parser state: the module and port that new lines attach to.
        let mut current_module: Option<usize> = None;
        let mut last_port: Option<usize> = None;

        for raw in text.lines() {
            let line = raw.trim_end();
            let bytes = line.as_bytes();
            let mut indent = 0;
            while indent < bytes.len() && bytes[indent].is_ascii_whitespace() {
                indent += 1;
            }
            let body = &line[indent..];
            if body.is_empty() || body.starts_with('#') {
                continue;
            }

            match indent {
                MODULE_INDENT => {
                    let name = body.split(':').next().unwrap_or(body).to_string();
                    modules.push(Module {
                        name,
                        ports: Vec::new(),
                    });
                    current_module = Some(modules.len() - 1);
                    last_port = None;
                }
                PORT_INDENT => {
                    if let Some(m) = current_module {
                        if let Some(token) = body.split_whitespace().next() {
                            let name = token.split(':').next().unwrap_or(token);
                            modules[m].ports.push(Port {
                                name: name.to_string(),
                                direction: Direction::InOut,
                            });
                            last_port = Some(modules[m].ports.len() - 1);
                        }
                    }
                }
                DIRECTION_INDENT => {
                    if let (Some(m), Some(p)) = (current_module, last_port) {
                        if let Some(pos) = body.find("direction:") {
                            let value = body[pos + "direction:".len()..].trim_start();
                            modules[m].ports[p].direction = Direction::classify(value);
                        }
                    }
                }
                _ => {}
            }
        }

        ModuleTable { modules }
    }

    /// Read and parse a descriptor file.
    pub fn parse_file(path: &Path) -> io::Result<Self> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    /// Look up a module by exact name. Duplicate names resolve to the first
    /// declaration.
    pub fn get(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == name)
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
