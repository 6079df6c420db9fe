#![forbid(unsafe_code)]

/// Imperative control surface handed to the sheet's owner.
///
/// Both calls return immediately and take effect over subsequent ticks.
/// `open` on a mounted sheet and `close` on an unmounted one do nothing.
pub trait SheetHandle {
    /// Mount the sheet and animate it to its full height.
    fn open(&mut self);

    /// Animate the sheet to its closing height, then unmount it.
    fn close(&mut self);
}
