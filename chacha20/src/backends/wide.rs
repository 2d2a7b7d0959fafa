//! Portable backend producing four blocks per call.
//!
//! Blocks at distinct counters share nothing but the key and nonce, so the
//! four are computed independently, which leaves the compiler free to
//! interleave them.

use super::soft;
use crate::{block::keystream_block, Block, ChaChaCore};
use cipher::{
    consts::{U4, U64},
    generic_array::typenum::Unsigned,
    BlockSizeUser, ParBlocks, ParBlocksSizeUser, StreamBackend,
};

pub(crate) struct Backend<'a>(pub(crate) &'a mut ChaChaCore);

impl<'a> BlockSizeUser for Backend<'a> {
    type BlockSize = U64;
}

impl<'a> ParBlocksSizeUser for Backend<'a> {
    type ParBlocksSize = U4;
}

impl<'a> StreamBackend for Backend<'a> {
    #[inline(always)]
    fn gen_ks_block(&mut self, block: &mut Block) {
        soft::Backend(&mut *self.0).gen_ks_block(block);
    }

    #[inline(always)]
    fn gen_par_ks_blocks(&mut self, blocks: &mut ParBlocks<Self>) {
        let state = self.0.state;
        let base = state.counter();
        for (i, block) in blocks.iter_mut().enumerate() {
            let res = keystream_block(&state.with_counter(base.wrapping_add(i as u32)));
            for (chunk, val) in block.chunks_exact_mut(4).zip(res.iter()) {
                chunk.copy_from_slice(&val.to_le_bytes());
            }
        }
        self.0.state = state.with_counter(base.wrapping_add(U4::U32));
    }
}
