use crate::capability::{CapabilityHandle, PeripheralFactory};
use crate::traits::{Button, ButtonReader, Joystick, JoystickPosition};

const ALL_BUTTONS: [Button; 11] = [
    Button::A,
    Button::B,
    Button::Start,
    Button::Select,
    Button::Up,
    Button::Down,
    Button::Left,
    Button::Right,
    Button::O,
    Button::X,
    Button::Z,
];

/// Compact set of named buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSet(u16);

impl ButtonSet {
    pub const EMPTY: Self = Self(0);

    const fn bit(button: Button) -> u16 {
        1 << button as u16
    }

    pub fn insert(&mut self, button: Button) {
        self.0 |= Self::bit(button);
    }

    pub const fn contains(&self, button: Button) -> bool {
        self.0 & Self::bit(button) != 0
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn difference(&self, other: &ButtonSet) -> ButtonSet {
        ButtonSet(self.0 & !other.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = Button> + '_ {
        ALL_BUTTONS.into_iter().filter(|b| self.contains(*b))
    }
}

impl FromIterator<Button> for ButtonSet {
    fn from_iter<T: IntoIterator<Item = Button>>(iter: T) -> Self {
        let mut set = ButtonSet::EMPTY;
        for button in iter {
            set.insert(button);
        }
        set
    }
}

/// Immutable point-in-time read of every present input
///
/// Buttons the board does not have are absent rather than released:
/// [`InputSnapshot::is_pressed`] returns `None` for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSnapshot {
    available: ButtonSet,
    pressed: ButtonSet,
    joystick: Option<JoystickPosition>,
}

impl InputSnapshot {
    /// Buttons this board can report, including stick-derived directions
    pub fn available(&self) -> ButtonSet {
        self.available
    }

    /// Buttons pressed at the time of the read
    pub fn pressed(&self) -> ButtonSet {
        self.pressed
    }

    /// Raw stick position, `None` on boards without a joystick
    pub fn joystick(&self) -> Option<JoystickPosition> {
        self.joystick
    }

    /// State of one button, `None` if the board does not have it
    pub fn is_pressed(&self, button: Button) -> Option<bool> {
        self.available
            .contains(button)
            .then(|| self.pressed.contains(button))
    }

    pub fn any_pressed(&self) -> bool {
        !self.pressed.is_empty()
    }

    /// Buttons pressed now that were not pressed in `previous`
    pub fn newly_pressed(&self, previous: &InputSnapshot) -> ButtonSet {
        self.pressed.difference(&previous.pressed)
    }
}

/// Read all present buttons and the joystick
///
/// On boards with a stick and no d-pad buttons the four directions are
/// derived from the stick position.
pub fn read_inputs<F: PeripheralFactory>(handle: &mut CapabilityHandle<F>) -> InputSnapshot {
    let mut snapshot = InputSnapshot::default();

    if let Some(layout) = handle.descriptor().buttons.as_ref() {
        if let Ok(reader) = handle.buttons() {
            let mask = reader.pressed_mask();
            for (i, button) in layout.names.iter().enumerate() {
                snapshot.available.insert(*button);
                if mask & (1 << i) != 0 {
                    snapshot.pressed.insert(*button);
                }
            }
        }
    }

    if let Ok(joystick) = handle.joystick() {
        let position = joystick.position();
        snapshot.joystick = Some(position);
        for direction in Button::DIRECTIONS {
            if snapshot.available.contains(direction) {
                continue;
            }
            snapshot.available.insert(direction);
            if position.pushed(direction) {
                snapshot.pressed.insert(direction);
            }
        }
    }

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardModel, BOARDS};
    use crate::mock::MockFactory;

    fn handle_for(model: BoardModel) -> CapabilityHandle<MockFactory> {
        let board = BOARDS.iter().find(|b| b.model == model).unwrap();
        CapabilityHandle::build(board, MockFactory::default()).unwrap()
    }

    #[test]
    fn test_absent_inputs_are_omitted() {
        let mut handle = handle_for(BoardModel::PyPortal);
        let snapshot = read_inputs(&mut handle);
        assert!(snapshot.available().is_empty());
        assert_eq!(snapshot.joystick(), None);
        assert_eq!(snapshot.is_pressed(Button::A), None);
    }

    #[test]
    fn test_shift_register_mask_maps_to_names() {
        let mut handle = handle_for(BoardModel::PyBadge);
        // B,A,Start,Select,Right,Down,Up,Left: press A and Up
        handle.buttons().unwrap().mask = 0b0100_0010;
        let snapshot = read_inputs(&mut handle);

        assert_eq!(snapshot.available().len(), 8);
        assert_eq!(snapshot.is_pressed(Button::A), Some(true));
        assert_eq!(snapshot.is_pressed(Button::Up), Some(true));
        assert_eq!(snapshot.is_pressed(Button::B), Some(false));
        assert_eq!(snapshot.is_pressed(Button::O), None);
        assert_eq!(snapshot.joystick(), None);
    }

    #[test]
    fn test_joystick_derives_directions() {
        let mut handle = handle_for(BoardModel::PyGamer);
        handle.joystick().unwrap().position = JoystickPosition { x: 10_000, y: 60_000 };
        let snapshot = read_inputs(&mut handle);

        assert_eq!(snapshot.is_pressed(Button::Left), Some(true));
        assert_eq!(snapshot.is_pressed(Button::Down), Some(true));
        assert_eq!(snapshot.is_pressed(Button::Right), Some(false));
        assert_eq!(snapshot.is_pressed(Button::Start), Some(false));
        assert_eq!(snapshot.available().len(), 8);
    }

    #[test]
    fn test_newly_pressed() {
        let mut handle = handle_for(BoardModel::PyBadge);
        handle.buttons().unwrap().mask = 0b0000_0001;
        let first = read_inputs(&mut handle);
        handle.buttons().unwrap().mask = 0b0000_0011;
        let second = read_inputs(&mut handle);

        let new: Vec<_> = second.newly_pressed(&first).iter().collect();
        assert_eq!(new, vec![Button::A]);
        assert!(first.newly_pressed(&second).is_empty());
    }

    #[test]
    fn test_read_does_not_touch_display() {
        let mut handle = handle_for(BoardModel::PyGamer);
        let _ = read_inputs(&mut handle);
        assert!(handle.display().writes.is_empty());
    }
}
