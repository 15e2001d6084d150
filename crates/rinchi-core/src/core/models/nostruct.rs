use serde::Serialize;

/// Number of structure-less components (`/u` layer) in layers 2, 3 and 4.
///
/// The counts are carried through unchanged; nothing in this crate interprets them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct NoStructCounts {
    pub layer2: u32,
    pub layer3: u32,
    pub layer4: u32,
}

impl NoStructCounts {
    pub fn new(layer2: u32, layer3: u32, layer4: u32) -> Self {
        Self {
            layer2,
            layer3,
            layer4,
        }
    }

    pub fn total(&self) -> u64 {
        u64::from(self.layer2) + u64::from(self.layer3) + u64::from(self.layer4)
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
