//! The compiled-in challenge list and its grid placement.

/// A 1-based grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub row: u32,
    pub column: u32,
}

impl GridPos {
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

/// One selectable challenge card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceItem {
    pub id: u32,
    pub label: &'static str,
    pub icon_token: &'static str,
    pub description: &'static str,
}

/// Challenges shown in the "choose your game" grid, in path order
pub static GAMES: [ChoiceItem; 10] = [
    ChoiceItem {
        id: 1,
        label: "Uno Flip",
        icon_token: "a",
        description: "Teams take turns flipping two cards to find matching pairs, using memory and strategy to score the most matches.",
    },
    ChoiceItem {
        id: 2,
        label: "Gemini",
        icon_token: "b",
        description: "Players recreate a given AI-generated image as closely as possible by writing effective text prompts, no image upload allowed.",
    },
    ChoiceItem {
        id: 3,
        label: "Tower Defence",
        icon_token: "c",
        description: "Teams build and defend a cup tower while teammates throw balls to knock down the opponent's tower within a time limit.",
    },
    ChoiceItem {
        id: 4,
        label: "Maze Game",
        icon_token: "d",
        description: "A blindfolded player navigates a taped maze using only indirect communication and teamwork from teammates.",
    },
    ChoiceItem {
        id: 5,
        label: "Human Tic Tac Toe",
        icon_token: "e",
        description: "Players race to claim positions on a 3×3 grid, aiming to form three in a row before the opposing team.",
    },
    ChoiceItem {
        id: 6,
        label: "5-Legged Sprint",
        icon_token: "f",
        description: "Four players run a race while their legs are tied together, testing balance, coordination, and teamwork.",
    },
    ChoiceItem {
        id: 7,
        label: "Red Light Green Light",
        icon_token: "g",
        description: "Players move only during \"Green Light\" and must freeze instantly at \"Red Light\" to avoid elimination.",
    },
    ChoiceItem {
        id: 8,
        label: "Pass the Hoop",
        icon_token: "h",
        description: "A team passes a hoop through every member while holding hands the entire time, without breaking the chain.",
    },
    ChoiceItem {
        id: 9,
        label: "Auction Round",
        icon_token: "i",
        description: "Teams bid their points in auctions to win mystery boxes containing hidden rewards or penalties.",
    },
    ChoiceItem {
        id: 10,
        label: "Code Relay",
        icon_token: "j",
        description: "Teams solve a coding problem in relay style, with each member coding for only 10 seconds and no communication allowed.",
    },
];

/// Look up a challenge by id
pub fn find(id: u32) -> Option<&'static ChoiceItem> {
    GAMES.iter().find(|item| item.id == id)
}

/// Places items along a snake path: left to right on odd rows, right to left
/// on even rows, so consecutive items are always grid neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    columns: u32,
}

impl GridLayout {
    /// Panics if `columns` is zero.
    pub fn snake(columns: u32) -> Self {
        assert!(columns > 0, "grid needs at least one column");
        Self { columns }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows_for(&self, count: usize) -> u32 {
        (count as u32).div_ceil(self.columns)
    }

    /// Cell for the item at `index` (0-based, path order)
    pub fn position(&self, index: usize) -> GridPos {
        let index = index as u32;
        let row = index / self.columns;
        let offset = index % self.columns;
        let column = if row % 2 == 0 {
            offset
        } else {
            self.columns - 1 - offset
        };
        GridPos::new(row + 1, column + 1)
    }

    pub fn positions(&self, count: usize) -> Vec<GridPos> {
        (0..count).map(|index| self.position(index)).collect()
    }
}
