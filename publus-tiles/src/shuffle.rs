//! A seedable xorshift generator with selectable shift patterns.

/// The word every fresh or zero-seeded generator starts from.
pub const DEFAULT_SEED: u32 = 2_463_534_242;

/// The shift triples the generator can be configured with.
pub const TRIPLES: [(u32, u32, u32); 81] = [
    (1, 3, 10),
    (1, 5, 16),
    (1, 5, 19),
    (1, 9, 29),
    (1, 11, 6),
    (1, 11, 16),
    (1, 19, 3),
    (1, 21, 20),
    (1, 27, 27),
    (2, 5, 15),
    (2, 5, 21),
    (2, 7, 7),
    (2, 7, 9),
    (2, 7, 25),
    (2, 9, 15),
    (2, 15, 17),
    (2, 15, 25),
    (2, 21, 9),
    (3, 1, 14),
    (3, 3, 26),
    (3, 3, 28),
    (3, 3, 29),
    (3, 5, 20),
    (3, 5, 22),
    (3, 5, 25),
    (3, 7, 29),
    (3, 13, 7),
    (3, 23, 25),
    (3, 25, 24),
    (3, 27, 11),
    (4, 3, 17),
    (4, 3, 27),
    (4, 5, 15),
    (5, 3, 21),
    (5, 7, 22),
    (5, 9, 7),
    (5, 9, 28),
    (5, 9, 31),
    (5, 13, 6),
    (5, 15, 17),
    (5, 17, 13),
    (5, 21, 12),
    (5, 27, 8),
    (5, 27, 21),
    (5, 27, 25),
    (5, 27, 28),
    (6, 1, 11),
    (6, 3, 17),
    (6, 17, 9),
    (6, 21, 7),
    (6, 21, 13),
    (7, 1, 9),
    (7, 1, 18),
    (7, 1, 25),
    (7, 13, 25),
    (7, 17, 21),
    (7, 25, 12),
    (7, 25, 20),
    (8, 7, 23),
    (8, 9, 23),
    (9, 5, 14),
    (9, 5, 25),
    (9, 11, 19),
    (9, 21, 16),
    (10, 9, 21),
    (10, 9, 25),
    (11, 7, 12),
    (11, 7, 16),
    (11, 17, 13),
    (11, 21, 13),
    (12, 9, 23),
    (13, 3, 17),
    (13, 3, 27),
    (13, 5, 19),
    (13, 17, 15),
    (14, 1, 15),
    (14, 13, 15),
    (15, 1, 29),
    (17, 15, 20),
    (17, 15, 23),
    (17, 15, 26),
];

const DEFAULT_TRIPLE: usize = 74;

/// The order and direction in which a triple `(a, b, c)` is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// `<< a`, `>> b`, `<< c`.
    LeftRightLeft,
    /// `<< c`, `>> b`, `<< a`.
    LeftRightLeftReversed,
    /// `>> a`, `<< b`, `>> c`.
    RightLeftRight,
    /// `>> c`, `<< b`, `>> a`.
    RightLeftRightReversed,
    /// `<< a`, `<< c`, `>> b`.
    LeftLeftRight,
    /// `>> a`, `>> c`, `<< b`.
    RightRightLeft,
}

impl Transition {
    /// All transitions, in selector order.
    pub const ALL: [Self; 6] = [
        Self::LeftRightLeft,
        Self::LeftRightLeftReversed,
        Self::RightLeftRight,
        Self::RightLeftRightReversed,
        Self::LeftLeftRight,
        Self::RightRightLeft,
    ];

    /// Advance `word` by one step.
    pub fn apply(self, mut word: u32, (a, b, c): (u32, u32, u32)) -> u32 {
        match self {
            Self::LeftRightLeft => {
                word ^= word << a;
                word ^= word >> b;
                word ^= word << c;
            }
            Self::LeftRightLeftReversed => {
                word ^= word << c;
                word ^= word >> b;
                word ^= word << a;
            }
            Self::RightLeftRight => {
                word ^= word >> a;
                word ^= word << b;
                word ^= word >> c;
            }
            Self::RightLeftRightReversed => {
                word ^= word >> c;
                word ^= word << b;
                word ^= word >> a;
            }
            Self::LeftLeftRight => {
                word ^= word << a;
                word ^= word << c;
                word ^= word >> b;
            }
            Self::RightRightLeft => {
                word ^= word >> a;
                word ^= word >> c;
                word ^= word << b;
            }
        }

        word
    }
}

/// A xorshift generator.
///
/// Each image builds its own generator and draws from it in a fixed order.
#[derive(Debug, Clone)]
pub struct ShuffleEngine {
    word: u32,
    triple: (u32, u32, u32),
    transition: Transition,
}

impl Default for ShuffleEngine {
    fn default() -> Self {
        Self {
            word: DEFAULT_SEED,
            triple: TRIPLES[DEFAULT_TRIPLE],
            transition: Transition::LeftRightLeft,
        }
    }
}

impl ShuffleEngine {
    /// Create a generator with the default triple and transition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the triple and transition, and reset the word to
    /// [`DEFAULT_SEED`].
    pub fn seed(&mut self, triple: usize, transition: Transition) {
        self.word = DEFAULT_SEED;
        self.triple = TRIPLES[triple % TRIPLES.len()];
        self.transition = transition;
    }

    /// Configure triple and transition from a single selector.
    pub fn select(&mut self, selector: u32) {
        let transitions = Transition::ALL.len() as u32;
        let transition = Transition::ALL[(selector % transitions) as usize];
        let triple = (selector / transitions) as usize % TRIPLES.len();

        self.seed(triple, transition);
    }

    /// Replace the word, keeping the configuration. A zero value restores
    /// [`DEFAULT_SEED`].
    pub fn reseed(&mut self, value: u32) {
        self.word = if value == 0 { DEFAULT_SEED } else { value };
    }

    /// Draw a uniformly distributed value in `0..n`. Returns zero when `n` is
    /// zero or one without advancing the generator.
    pub fn next_below(&mut self, n: u32) -> u32 {
        if n <= 1 {
            return 0;
        }

        // Draws from the incomplete final bucket are rejected.
        let limit = !n;
        let mut word = self.word;

        loop {
            word = self.transition.apply(word, self.triple);
            let value = word.wrapping_sub(1);
            let rem = value % n;

            if value - rem <= limit {
                self.word = word;
                return rem;
            }
        }
    }
}
