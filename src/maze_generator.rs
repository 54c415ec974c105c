//! Maze generation

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::debug;

use crate::graph::{Direction, Graph};

/// Maze generator for drawing demos.
pub struct MazeGenerator {
    random: StdRng,
    loop_probability: f64,
}

impl MazeGenerator {
    const DEFAULT_LOOP_PROBABILITY: f64 = 0.05;

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
            loop_probability: Self::DEFAULT_LOOP_PROBABILITY,
        }
    }

    /// Chance of carving into an already visited cell
    ///
    /// Zero produces a perfect maze (exactly one path between any two
    /// cells). Values are clamped to `0.0..=1.0`.
    pub fn with_loop_probability(mut self, probability: f64) -> Self {
        self.loop_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Generate a maze with randomized depth-first search
    ///
    /// From the current cell, go into a random unvisited neighbor and carve
    /// the wall between. When stuck, back up. Visited neighbors are carved
    /// into at random as well, which creates loops.
    ///
    /// # Examples
    /// ```
    /// use unicode_tetragon::maze_generator::MazeGenerator;
    ///
    /// let graph = MazeGenerator::new(Some(7)).generate(4, 3).unwrap();
    /// assert_eq!(graph.dimensions(), (4, 3));
    /// ```
    pub fn generate(&mut self, length: usize, height: usize) -> anyhow::Result<Graph> {
        let mut graph = Graph::new(length, height)?;
        let mut visited = vec![false; length * height];

        let start = self.random.gen_range(0..length * height);
        visited[start] = true;
        let mut stack = vec![start];

        while let Some(&current) = stack.last() {
            let mut directions = Direction::ALL;
            directions.shuffle(&mut self.random);

            let mut next = None;
            for direction in directions {
                let Some(neighbor) = graph.data()[current].neighbors.get(direction) else {
                    continue;
                };
                if !visited[neighbor] {
                    graph.carve(current, direction)?;
                    next = Some(neighbor);
                    break;
                }
                if self.loop_probability > 0.0 && self.random.gen_bool(self.loop_probability) {
                    graph.carve(current, direction)?;
                }
            }

            match next {
                Some(neighbor) => {
                    visited[neighbor] = true;
                    stack.push(neighbor);
                }
                None => {
                    stack.pop();
                }
            }
        }

        debug!(length, height, start, "Generated maze");
        Ok(graph)
    }
}
