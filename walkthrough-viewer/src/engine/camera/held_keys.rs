use bevy::prelude::*;

/// Currently-held movement keys in press order.
///
/// Key-down appends a code only if it is not already present, so keyboard
/// auto-repeat never duplicates an entry. The set lives only as long as the
/// app world and is cleared whenever the window loses focus.
#[derive(Resource, Default, Debug)]
pub struct HeldKeys {
    keys: Vec<KeyCode>,
}

impl HeldKeys {
    pub fn press(&mut self, key: KeyCode) {
        if !self.keys.contains(&key) {
            self.keys.push(key);
        }
    }

    pub fn release(&mut self, key: KeyCode) {
        self.keys.retain(|held| *held != key);
    }

    /// Drop every held key, e.g. on window focus loss.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Held keys in press order.
    pub fn iter(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.keys.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_adds_once_despite_auto_repeat() {
        let mut held = HeldKeys::default();
        held.press(KeyCode::KeyW);
        held.press(KeyCode::KeyW);
        held.press(KeyCode::KeyW);
        assert_eq!(held.len(), 1);
    }

    #[test]
    fn press_order_is_preserved() {
        let mut held = HeldKeys::default();
        held.press(KeyCode::ArrowLeft);
        held.press(KeyCode::KeyW);
        held.press(KeyCode::ArrowRight);
        let order: Vec<_> = held.iter().collect();
        assert_eq!(
            order,
            vec![KeyCode::ArrowLeft, KeyCode::KeyW, KeyCode::ArrowRight]
        );
    }

    #[test]
    fn release_removes_only_that_key() {
        let mut held = HeldKeys::default();
        held.press(KeyCode::KeyW);
        held.press(KeyCode::KeyA);
        held.release(KeyCode::KeyW);
        let order: Vec<_> = held.iter().collect();
        assert_eq!(order, vec![KeyCode::KeyA]);
    }

    #[test]
    fn release_of_unheld_key_is_a_no_op() {
        let mut held = HeldKeys::default();
        held.press(KeyCode::KeyW);
        held.release(KeyCode::KeyS);
        assert_eq!(held.len(), 1);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut held = HeldKeys::default();
        held.press(KeyCode::KeyW);
        held.press(KeyCode::KeyA);
        held.clear();
        assert!(held.is_empty());
    }
}
