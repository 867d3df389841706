// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Circular playlist.
//!
//! The playlist is a ring of nodes, each linked to its neighbours in both
//! directions, with a single cursor marking the current track. Nodes live in
//! an arena and link to each other by position, so the ring never forms a
//! reference cycle.
//!
//! Navigation only ever moves the cursor; links are fixed once a node is
//! appended and nodes are never removed.

use rand::{SeedableRng, rngs::SmallRng, seq::IteratorRandom};

use crate::model::Track;

#[derive(Debug, Clone)]
struct Node {
    track: Track,
    next: usize,
    prev: usize,
}

#[derive(Debug, Clone)]
pub struct Playlist {
    nodes: Vec<Node>,
    current: Option<usize>,
    rng: SmallRng,
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new()
    }
}

impl Playlist {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_rng(&mut rand::rng()))
    }

    /// Creates an empty playlist whose random jumps follow a fixed sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Self {
            nodes: Vec::new(),
            current: None,
            rng,
        }
    }

    /// Inserts a track at the end of the ring, just behind the current track.
    ///
    /// The first track appended to an empty playlist becomes current and is
    /// its own neighbour in both directions.
    pub fn append(&mut self, track: Track) {
        let position = self.nodes.len();

        let Some(head) = self.current else {
            self.nodes.push(Node {
                track,
                next: position,
                prev: position,
            });
            self.current = Some(position);
            return;
        };

        let tail = self.nodes[head].prev;
        self.nodes.push(Node {
            track,
            next: head,
            prev: tail,
        });
        self.nodes[tail].next = position;
        self.nodes[head].prev = position;
    }

    /// Moves the cursor to the next track, wrapping after the last one.
    pub fn advance(&mut self) {
        if let Some(current) = self.current {
            self.current = Some(self.nodes[current].next);
        }
    }

    /// Moves the cursor to the previous track, wrapping before the first one.
    pub fn retreat(&mut self) {
        if let Some(current) = self.current {
            self.current = Some(self.nodes[current].prev);
        }
    }

    /// Moves the cursor to a track picked uniformly at random.
    ///
    /// Every track is a candidate, the current one included. Candidates are
    /// gathered by walking the ring once from the cursor.
    pub fn random_jump(&mut self) {
        let Some(start) = self.current else {
            return;
        };

        let ring = Ring {
            nodes: &self.nodes,
            cursor: start,
            remaining: self.nodes.len(),
        };

        if let Some(chosen) = ring.choose(&mut self.rng) {
            self.current = Some(chosen);
        }
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current.map(|position| &self.nodes[position].track)
    }

    /// Insertion index of the current track.
    pub fn current_position(&self) -> Option<usize> {
        self.current
    }

    /// Returns the `(next, prev)` insertion indices linked from the node at
    /// `position`.
    pub fn neighbours(&self, position: usize) -> Option<(usize, usize)> {
        self.nodes.get(position).map(|node| (node.next, node.prev))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates the tracks in the order they were appended.
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.nodes.iter().map(|node| &node.track)
    }
}

impl Extend<Track> for Playlist {
    fn extend<I: IntoIterator<Item = Track>>(&mut self, tracks: I) {
        for track in tracks {
            self.append(track);
        }
    }
}

impl FromIterator<Track> for Playlist {
    fn from_iter<I: IntoIterator<Item = Track>>(tracks: I) -> Self {
        let mut playlist = Playlist::new();
        playlist.extend(tracks);
        playlist
    }
}

/// Walks the ring by following `next` links, visiting each node exactly once.
struct Ring<'a> {
    nodes: &'a [Node],
    cursor: usize,
    remaining: usize,
}

impl Iterator for Ring<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }

        let position = self.cursor;
        self.cursor = self.nodes[position].next;
        self.remaining -= 1;

        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Ring<'_> {}
