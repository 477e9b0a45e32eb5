//! Adapts a precompile and a prepared input into a closure for [`BenchTimer`].
//!
//! [`BenchTimer`]: crate::timing::BenchTimer

use std::hint::black_box;

use crate::{
    Bytes,
    precompile::{Precompile, PrecompileError},
};

/// Returns a closure invoking `precompile` on `input` once per call.
///
/// The output is discarded through [`black_box`] so the invocation cannot be optimized away.
pub fn bench_fn<'a, P>(
    precompile: &'a P,
    input: &'a Bytes,
) -> impl FnMut() -> Result<(), PrecompileError> + 'a
where
    P: Precompile + ?Sized,
{
    move || {
        let output = precompile.run(black_box(input))?;
        black_box(output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use assert_matches::assert_matches;

    use super::*;
    use crate::precompile::{PrecompileKind, PrecompileOutput};

    struct FailAfter {
        calls: Cell<usize>,
        limit: usize,
    }

    impl Precompile for FailAfter {
        fn kind(&self) -> PrecompileKind {
            PrecompileKind::Ripemd160
        }

        fn run(&self, input: &Bytes) -> Result<PrecompileOutput, PrecompileError> {
            self.calls.set(self.calls.get() + 1);
            if self.calls.get() > self.limit {
                return Err(PrecompileError::Failed {
                    kind: self.kind(),
                    reason: "limit reached".into(),
                });
            }
            Ok(PrecompileOutput { bytes: input.clone(), charged_gas: 0 })
        }
    }

    #[test]
    fn every_call_invokes_the_precompile() {
        let precompile = FailAfter { calls: Cell::new(0), limit: 2 };
        let input = Bytes::from_static(b"abc");
        let mut run = bench_fn(&precompile, &input);

        assert_eq!(run(), Ok(()));
        assert_eq!(run(), Ok(()));
        assert_matches!(
            run(),
            Err(PrecompileError::Failed { kind: PrecompileKind::Ripemd160, .. })
        );
        drop(run);
        assert_eq!(precompile.calls.get(), 3);
    }
}
