//! Portable implementation which does not rely on architecture-specific
//! intrinsics.

use crate::{block::keystream_block, Block, ChaChaCore};
use cipher::{
    consts::{U1, U64},
    BlockSizeUser, ParBlocksSizeUser, StreamBackend,
};

pub(crate) struct Backend<'a>(pub(crate) &'a mut ChaChaCore);

impl<'a> BlockSizeUser for Backend<'a> {
    type BlockSize = U64;
}

impl<'a> ParBlocksSizeUser for Backend<'a> {
    type ParBlocksSize = U1;
}

impl<'a> StreamBackend for Backend<'a> {
    #[inline(always)]
    fn gen_ks_block(&mut self, block: &mut Block) {
        let state = self.0.state;
        let res = keystream_block(&state);
        self.0.state = state.with_counter(state.counter().wrapping_add(1));

        for (chunk, val) in block.chunks_exact_mut(4).zip(res.iter()) {
            chunk.copy_from_slice(&val.to_le_bytes());
        }
    }
}
