/// Weight capability of an edge payload.
///
/// Payloads that carry no notion of length (street names, relationship
/// labels) keep the default unit weight, so a weight query over them
/// counts hops. Weights are unsigned: the path engine never re-expands a
/// settled vertex, which is only correct without negative edges.
pub trait EdgeWeight {
    fn weight(&self) -> u64 {
        1
    }
}

impl EdgeWeight for String {}
impl EdgeWeight for &str {}
impl EdgeWeight for char {}
impl EdgeWeight for () {}

macro_rules! numeric_weight {
    ($($t:ty),*) => {
        $(
            impl EdgeWeight for $t {
                #[inline]
                fn weight(&self) -> u64 {
                    *self as u64
                }
            }
        )*
    };
}

// A bare unsigned number is its own weight.
numeric_weight!(u8, u16, u32, u64, usize);

/// Labeled edge with an explicit weight.
///
/// Two `WeightedEdge`s are the same edge for turn counting only when both
/// label and weight match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeightedEdge<L> {
    pub label: L,
    pub weight: u64,
}

impl<L> WeightedEdge<L> {
    pub fn new(label: L, weight: u64) -> Self {
        Self { label, weight }
    }
}

impl<L> EdgeWeight for WeightedEdge<L> {
    #[inline]
    fn weight(&self) -> u64 {
        self.weight
    }
}
