//! The hill climbing puzzle: a grid of letter elevations with a start `S` and
//! an end `E`, where each step may climb at most one level.

use std::path::Path;
use std::str::FromStr;

use log::{debug, info};
use serde::Serialize;

use crate::algorithm::find_shortest_paths;
use crate::config::{AlgorithmKind, SolverConfig};
use crate::graph::{Graph, KeyedGraph, MutableGraph};
use crate::input::read_lines;
use crate::{Error, Result};

/// `(row, column)` of a cell
pub type Position = (usize, usize);

/// Highest elevation, the one of `z` and `E`
pub const MAX_ELEVATION: u8 = 25;

/// A single heightmap square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub elevation: u8,
    pub is_start: bool,
    pub is_end: bool,
}

impl Cell {
    /// Decodes a heightmap character. `S` sits at elevation `a`, `E` at elevation `z`.
    pub fn from_char(c: char) -> Option<Cell> {
        let cell = match c {
            'S' => Cell {
                elevation: 0,
                is_start: true,
                is_end: false,
            },
            'E' => Cell {
                elevation: MAX_ELEVATION,
                is_start: false,
                is_end: true,
            },
            'a'..='z' => Cell {
                elevation: c as u8 - b'a',
                is_start: false,
                is_end: false,
            },
            _ => return None,
        };
        Some(cell)
    }

    /// True if a single step from `self` onto `other` is allowed
    pub fn can_step_to(&self, other: &Cell) -> bool {
        other.elevation <= self.elevation + 1
    }
}

/// Answers to both puzzle parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub part_one: i64,
    pub part_two: i64,
    pub algorithm: AlgorithmKind,
}

/// A parsed, rectangular heightmap
#[derive(Debug, Clone)]
pub struct Heightmap {
    cells: Vec<Vec<Cell>>,
    start: Position,
    end: Position,
}

impl FromStr for Heightmap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s.lines().collect();
        Heightmap::from_lines(&lines)
    }
}

impl Heightmap {
    /// Parses the grid from its lines. Trailing blank lines are ignored.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let mut lines: Vec<&str> = lines.iter().map(|l| l.as_ref()).collect();
        while lines.last().map_or(false, |l| l.trim().is_empty()) {
            lines.pop();
        }

        if lines.is_empty() {
            return Err(Error::InvalidHeightmap("input is empty".to_string()));
        }

        let width = lines[0].chars().count();
        let mut cells = Vec::with_capacity(lines.len());
        let mut start = None;
        let mut end = None;

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(Error::InvalidHeightmap(format!(
                    "line {} has {} cells, expected {}",
                    row + 1,
                    found,
                    width
                )));
            }

            let mut cell_row = Vec::with_capacity(width);
            for (column, c) in line.chars().enumerate() {
                let cell = Cell::from_char(c).ok_or_else(|| {
                    Error::InvalidHeightmap(format!(
                        "invalid character {:?} at line {}, column {}",
                        c,
                        row + 1,
                        column + 1
                    ))
                })?;

                if cell.is_start && start.replace((row, column)).is_some() {
                    return Err(Error::InvalidHeightmap(format!(
                        "duplicate start at line {}, column {}",
                        row + 1,
                        column + 1
                    )));
                }
                if cell.is_end && end.replace((row, column)).is_some() {
                    return Err(Error::InvalidHeightmap(format!(
                        "duplicate end at line {}, column {}",
                        row + 1,
                        column + 1
                    )));
                }

                cell_row.push(cell);
            }
            cells.push(cell_row);
        }

        let start = start.ok_or_else(|| Error::InvalidHeightmap("no start (S)".to_string()))?;
        let end = end.ok_or_else(|| Error::InvalidHeightmap("no end (E)".to_string()))?;

        debug!(
            "Parsed {}x{} heightmap, start {:?}, end {:?}",
            cells.len(),
            width,
            start,
            end
        );

        Ok(Heightmap { cells, start, end })
    }

    /// Reads and parses a heightmap file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let lines = read_lines(path)?;
        Heightmap::from_lines(&lines)
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, |row| row.len())
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn cell(&self, (row, column): Position) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(column))
    }

    /// Orthogonal neighbours of a position that lie inside the grid
    fn neighbours(&self, (row, column): Position) -> impl Iterator<Item = Position> {
        let rows = self.rows();
        let columns = self.columns();
        let up = (row > 0).then(|| (row - 1, column));
        let down = (row + 1 < rows).then(|| (row + 1, column));
        let left = (column > 0).then(|| (row, column - 1));
        let right = (column + 1 < columns).then(|| (row, column + 1));
        [up, down, left, right].into_iter().flatten()
    }

    /// Builds the step graph: one vertex per cell, a unit-cost edge for every allowed step
    pub fn to_graph(&self) -> KeyedGraph<Position, Cell, i64> {
        let mut graph = KeyedGraph::with_capacity(self.rows() * self.columns());

        for (row, cells) in self.cells.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                graph.add_vertex((row, column), *cell);
            }
        }

        for (row, cells) in self.cells.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                for neighbour in self.neighbours((row, column)) {
                    let allowed = self
                        .cell(neighbour)
                        .map_or(false, |other| cell.can_step_to(other));
                    if allowed {
                        graph.add_edge((row, column), neighbour, 1);
                    }
                }
            }
        }

        graph
    }

    /// Fewest steps from `S` to `E`
    pub fn part_one(&self, config: &SolverConfig) -> Result<i64> {
        let graph = self.to_graph();
        let max_iterations = config.iteration_bound(graph.vertex_count());
        let table = find_shortest_paths(
            config.algorithm,
            &graph,
            &self.start,
            &self.end,
            max_iterations,
        )?;

        table.distance(&self.end).ok_or_else(|| {
            Error::Unreachable(format!("{:?} cannot reach {:?}", self.start, self.end))
        })
    }

    /// Fewest steps from any lowest cell to `E`, found with a single search
    /// from `E` over the reversed step graph
    pub fn part_two(&self, config: &SolverConfig) -> Result<i64> {
        let graph = self.to_graph().reversed();
        let max_iterations = config.iteration_bound(graph.vertex_count());
        let table = find_shortest_paths(
            config.algorithm,
            &graph,
            &self.end,
            &self.end,
            max_iterations,
        )?;

        graph
            .iter_vertices()
            .filter(|(_, cell)| cell.elevation == 0)
            .filter_map(|(position, _)| table.distance(position))
            .min()
            .ok_or_else(|| {
                Error::Unreachable(format!("no lowest cell can reach {:?}", self.end))
            })
    }

    /// Solves both parts with the given configuration
    pub fn solve(&self, config: &SolverConfig) -> Result<Solution> {
        let part_one = self.part_one(config)?;
        let part_two = self.part_two(config)?;
        info!(
            "Solved {}x{} heightmap with {}: {} / {}",
            self.rows(),
            self.columns(),
            config.algorithm,
            part_one,
            part_two
        );

        Ok(Solution {
            part_one,
            part_two,
            algorithm: config.algorithm,
        })
    }
}
