use quickcheck::{Arbitrary, Gen};

mod tree_set;

/// An enum for the various kinds of "things" to do to
/// an ordered set in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Add the element to the set
    Add(T),
    /// Remove the element from the set
    Remove(T),
    /// Compare range queries over `[min, max)`
    Subset(T, T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Add(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Subset(T::arbitrary(g), T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
