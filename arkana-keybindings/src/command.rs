//! Commands executed when a combo fires.

/// An executable action owned by a combo.
///
/// Returning `false` means "not handled": dispatch moves on to the next
/// candidate root.
pub trait Command {
    fn invoke(&mut self) -> bool;
}

impl<F> Command for F
where
    F: FnMut() -> bool,
{
    fn invoke(&mut self) -> bool {
        self()
    }
}

/// Boxed command as stored in the registry.
pub type BoxedCommand = Box<dyn Command>;
