use crate::spsc::Cons;

/// Ring owner that answers observer and consumer calls through its own consumer end.
///
/// Not exported: handing out `&mut Cons` would let a consumer of another ring be swapped in.
pub(crate) trait ConsOwner {
    fn cons(&self) -> &Cons;
    fn cons_mut(&mut self) -> &mut Cons;
}
