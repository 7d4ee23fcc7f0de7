/// Paint-order hint for callers organizing their draw calls.
///
/// Lower values are conceptually "on top": `TopUi` sorts before
/// `Background`. The renderer itself never reads these; they exist so
/// calling code has one shared vocabulary for ordering.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Layer {
    TopUi = 0,
    Ui = 1,
    Foreground = 2,
    Midground = 3,
    Background = 4,
}

impl Layer {
    pub const ALL: [Layer; 5] = [
        Layer::TopUi,
        Layer::Ui,
        Layer::Foreground,
        Layer::Midground,
        Layer::Background,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_order_top_to_back() {
        assert!(Layer::TopUi < Layer::Ui);
        assert!(Layer::Ui < Layer::Foreground);
        assert!(Layer::Foreground < Layer::Midground);
        assert!(Layer::Midground < Layer::Background);
    }

    #[test]
    fn discriminants_are_stable() {
        let values: Vec<u8> = Layer::ALL.iter().map(|l| *l as u8).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
    }
}
