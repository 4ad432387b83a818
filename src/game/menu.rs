use super::config::Difficulty;

/// One entry of the difficulty menu, with no presentation attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuButton {
    pub label: &'static str,
    /// Slot in the menu, top to bottom
    pub index: usize,
    pub selected: bool,
}

/// Selection state for the difficulty menu
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DifficultyMenu {
    selected: usize,
}

impl DifficultyMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &'static [Difficulty] {
        &Difficulty::ALL
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_difficulty(&self) -> Difficulty {
        self.options()[self.selected]
    }

    /// Move the highlight up, wrapping from the first entry to the last
    pub fn select_previous(&mut self) {
        let n = self.options().len();
        self.selected = (self.selected + n - 1) % n;
    }

    /// Move the highlight down, wrapping from the last entry to the first
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.options().len();
    }

    /// Put the highlight back on the first entry
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    pub fn buttons(&self) -> Vec<MenuButton> {
        self.options()
            .iter()
            .enumerate()
            .map(|(index, difficulty)| MenuButton {
                label: difficulty.label(),
                index,
                selected: index == self.selected,
            })
            .collect()
    }
}
