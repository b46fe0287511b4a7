//! The assembly engine: directed and bidirectional de Bruijn graph walks.
//!
//! ## Algorithm
//!
//! From a seed k-mer, a walk repeatedly:
//!
//! 1. asks the codec for the candidate neighbors in the direction of travel;
//! 2. filters the candidates down to those present in the graph store;
//! 3. splits the survivors into novel and already-visited;
//! 4. extends by one symbol if exactly one survivor is novel, and stops
//!    otherwise.
//!
//! A node with one novel neighbor and any number of visited neighbors is
//! not treated as a fork: the visited branches already belong to this
//! assembly, so the walk takes the one genuinely new continuation. Stops
//! are classified as [`StopReason::DeadEnd`] (no graph-present neighbor),
//! [`StopReason::Fork`] (two or more novel neighbors), or
//! [`StopReason::Cycle`] (present neighbors exist but all were visited).
//!
//! ## Visited state
//!
//! The visited set persists across walks on the same assembler. That is
//! what lets a second walk recognize territory the first one covered and
//! stop at the junction instead of re-assembling it. Call
//! [`clear_seen`](Assembler::clear_seen) between logically independent
//! assemblies.
//!
//! ## Determinism
//!
//! The codec and store answer as pure functions, candidates arrive in
//! fixed alphabet order, and the visited check runs before every
//! acceptance. The same seed over the same graph and visited state
//! therefore always yields the same contig, and circular inputs terminate
//! after exactly one lap.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use thiserror::Error;

use crate::codec::KmerCodec;
use crate::cursor::{Cursor, CursorError};
use crate::store::GraphStore;
use crate::types::{Direction, Extension, KmerToken, Shift, StopReason};

/// Error type for assembler operations.
#[derive(Debug, Clone, Error)]
pub enum AssemblerError {
    /// The supplied window was rejected by the cursor.
    #[error(transparent)]
    Cursor(#[from] CursorError),
    /// A resumption walk was requested before any cursor was set.
    #[error("No cursor set: seed an assembly or call set_cursor first")]
    UnconfiguredCursor,
    /// Codec error.
    #[error("Codec error: {0}")]
    Codec(String),
    /// Store error.
    #[error("Store error: {0}")]
    Store(String),
}

impl AssemblerError {
    /// Create a codec error from any error type.
    pub fn from_codec<E: std::error::Error>(e: E) -> Self {
        Self::Codec(e.to_string())
    }

    /// Create a store error from any error type.
    pub fn from_store<E: std::error::Error>(e: E) -> Self {
        Self::Store(e.to_string())
    }
}

/// What one attempted step resolved to.
enum StepOutcome {
    /// Accept the shift: advance the walk by one symbol.
    Advance(Shift),
    /// Terminate the walk.
    Stop(StopReason),
}

/// De Bruijn graph assembler.
///
/// Generic over a [`KmerCodec`] and a [`GraphStore`]; both are shared
/// behind `Arc` so several assemblers can walk one graph. Each assembler
/// owns its cursor and visited set, and every walk method takes `&mut
/// self`, so a single assembler never interleaves two walks.
pub struct Assembler<C: KmerCodec, S: GraphStore> {
    codec: Arc<C>,
    store: Arc<S>,
    cursor: Cursor,
    seen: HashSet<KmerToken>,
}

impl<C: KmerCodec, S: GraphStore> Assembler<C, S> {
    /// Create an assembler over a codec and a graph store.
    pub fn new(codec: Arc<C>, store: Arc<S>) -> Self {
        let k = codec.k();
        Self {
            codec,
            store,
            cursor: Cursor::new(k),
            seen: HashSet::new(),
        }
    }

    /// The configured window length.
    pub fn k(&self) -> usize {
        self.cursor.k()
    }

    /// The codec.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// The graph store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The current cursor window, if one has been set.
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.window()
    }

    /// Position the cursor without walking. Visited state is untouched.
    pub fn set_cursor(&mut self, window: &str) -> Result<(), AssemblerError> {
        self.cursor.set(window)?;
        Ok(())
    }

    /// Number of k-mers marked visited so far.
    pub fn seen_len(&self) -> usize {
        self.seen.len()
    }

    /// Empty the visited set.
    ///
    /// Idempotent. Call between independent assemblies: a stale visited
    /// set makes covered territory look like a cycle.
    pub fn clear_seen(&mut self) {
        self.seen.clear();
    }

    /// Assemble in both directions around `seed`.
    ///
    /// Walks left to exhaustion, then right from the seed again, and
    /// returns the full contig including the seed window. Returns an empty
    /// string when the seed k-mer is not in the graph. The cursor is left
    /// at the rightward walk's final position.
    pub fn assemble(&mut self, seed: &str) -> Result<String, AssemblerError> {
        let Some(token) = self.seed(seed)? else {
            return Ok(String::new());
        };
        let mut path: VecDeque<char> = seed.chars().collect();
        self.walk(token, Direction::Left, &mut path)?;
        let (last, _) = self.walk(token, Direction::Right, &mut path)?;
        self.park(last)?;
        Ok(path.into_iter().collect())
    }

    /// Assemble leftward from `seed`.
    ///
    /// Returns the contig up to and including the seed window, or an empty
    /// string when the seed k-mer is not in the graph. The cursor is left
    /// at the walk's final (leftmost) position.
    pub fn assemble_left(&mut self, seed: &str) -> Result<String, AssemblerError> {
        let Some(token) = self.seed(seed)? else {
            return Ok(String::new());
        };
        let mut path: VecDeque<char> = seed.chars().collect();
        let (last, _) = self.walk(token, Direction::Left, &mut path)?;
        self.park(last)?;
        Ok(path.into_iter().collect())
    }

    /// Assemble rightward from `seed`.
    ///
    /// Returns the contig from the seed window onward, or an empty string
    /// when the seed k-mer is not in the graph. The cursor is left at the
    /// walk's final (rightmost) position.
    pub fn assemble_right(&mut self, seed: &str) -> Result<String, AssemblerError> {
        let Some(token) = self.seed(seed)? else {
            return Ok(String::new());
        };
        let mut path: VecDeque<char> = seed.chars().collect();
        let (last, _) = self.walk(token, Direction::Right, &mut path)?;
        self.park(last)?;
        Ok(path.into_iter().collect())
    }

    /// Resume leftward from the current cursor.
    ///
    /// The cursor k-mer is marked visited but not re-emitted; the returned
    /// [`Extension`] carries only the newly accepted symbols plus the stop
    /// reason. Fails with [`AssemblerError::UnconfiguredCursor`] when no
    /// cursor was ever set.
    pub fn extend_left(&mut self) -> Result<Extension, AssemblerError> {
        self.extend(Direction::Left)
    }

    /// Resume rightward from the current cursor.
    ///
    /// Same contract as [`extend_left`](Assembler::extend_left), mirrored.
    pub fn extend_right(&mut self) -> Result<Extension, AssemblerError> {
        self.extend(Direction::Right)
    }

    fn extend(&mut self, direction: Direction) -> Result<Extension, AssemblerError> {
        let token = {
            let window = self
                .cursor
                .window()
                .ok_or(AssemblerError::UnconfiguredCursor)?;
            self.codec.encode(window).map_err(AssemblerError::from_codec)?
        };
        self.seen.insert(self.codec.membership(token));

        let mut path: VecDeque<char> = VecDeque::new();
        let (last, stop) = self.walk(token, direction, &mut path)?;
        self.park(last)?;
        Ok(Extension {
            appended: path.into_iter().collect(),
            stop,
        })
    }

    /// Seed a walk: position the cursor, encode the window, check graph
    /// presence, and mark the seed visited. Returns `None` when the seed
    /// k-mer is absent; the cursor is still positioned, the visited set is
    /// untouched.
    fn seed(&mut self, window: &str) -> Result<Option<KmerToken>, AssemblerError> {
        self.cursor.set(window)?;
        let token = self.codec.encode(window).map_err(AssemblerError::from_codec)?;
        let key = self.codec.membership(token);
        if !self
            .store
            .contains(key)
            .map_err(AssemblerError::from_store)?
        {
            tracing::warn!(window, "Seed k-mer is not in the graph");
            return Ok(None);
        }
        self.seen.insert(key);
        Ok(Some(token))
    }

    /// Park the cursor at a walk's final token.
    fn park(&mut self, token: KmerToken) -> Result<(), AssemblerError> {
        let window = self.codec.decode(token);
        self.cursor.set(&window)?;
        Ok(())
    }

    /// Walk from `token` until a stop condition, pushing accepted symbols
    /// onto `path` (front for left, back for right). Every accepted k-mer
    /// is marked visited before the next attempt. Returns the final token
    /// and the stop reason.
    fn walk(
        &mut self,
        mut token: KmerToken,
        direction: Direction,
        path: &mut VecDeque<char>,
    ) -> Result<(KmerToken, StopReason), AssemblerError> {
        let mut steps = 0usize;
        let stop = loop {
            match self.step(token, direction)? {
                StepOutcome::Advance(shift) => {
                    tracing::trace!(
                        symbol = %shift.symbol,
                        token = %shift.token,
                        "Extension accepted"
                    );
                    match direction {
                        Direction::Left => path.push_front(shift.symbol),
                        Direction::Right => path.push_back(shift.symbol),
                    }
                    self.seen.insert(self.codec.membership(shift.token));
                    token = shift.token;
                    steps += 1;
                }
                StepOutcome::Stop(reason) => break reason,
            }
        };
        tracing::debug!(
            direction = %direction,
            steps,
            stop = %stop,
            "Walk finished"
        );
        Ok((token, stop))
    }

    /// Resolve one step: gather candidates, filter against the graph, and
    /// apply the branch rule on the novel survivors.
    fn step(&self, token: KmerToken, direction: Direction) -> Result<StepOutcome, AssemblerError> {
        let candidates = match direction {
            Direction::Left => self.codec.left_neighbors(token),
            Direction::Right => self.codec.right_neighbors(token),
        };

        let mut present = 0usize;
        let mut novel_count = 0usize;
        let mut novel = None;
        for candidate in candidates {
            let key = self.codec.membership(candidate.token);
            if self
                .store
                .contains(key)
                .map_err(AssemblerError::from_store)?
            {
                present += 1;
                if !self.seen.contains(&key) {
                    novel_count += 1;
                    novel = Some(candidate);
                }
            }
        }

        Ok(match (novel_count, novel) {
            (1, Some(shift)) => StepOutcome::Advance(shift),
            (0, _) if present == 0 => StepOutcome::Stop(StopReason::DeadEnd),
            (0, _) => StepOutcome::Stop(StopReason::Cycle),
            _ => StepOutcome::Stop(StopReason::Fork),
        })
    }
}
