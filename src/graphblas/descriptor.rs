//! Operation descriptors
//!
//! A [`Descriptor`] adjusts a single `grb_*` call: either matrix input can
//! be read transposed, the mask can be complemented or read by pattern
//! only, and output entries the mask rejects can be dropped.

/// Per-call modifiers, all off by default.
///
/// Field names follow the GraphBLAS C API (`GrB_INP0`, `GrB_INP1`,
/// `GrB_MASK`, `GrB_OUTP`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Descriptor {
    pub inp0: Orientation,
    pub inp1: Orientation,
    pub mask: MaskField,
    pub outp: Output,
}

/// How a matrix input is read
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    AsStored,
    Transposed,
}

/// What happens to output entries outside the mask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Output {
    /// They keep their old value
    #[default]
    Merge,
    /// They are deleted
    Replace,
}

/// Mask reading; complement and structure combine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MaskField {
    /// Writable where the mask does NOT select
    pub complement: bool,
    /// A stored entry selects its position whatever its value
    pub structure: bool,
}

impl Descriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transpose_inp0(mut self) -> Self {
        self.inp0 = Orientation::Transposed;
        self
    }

    pub fn transpose_inp1(mut self) -> Self {
        self.inp1 = Orientation::Transposed;
        self
    }

    pub fn complement_mask(mut self) -> Self {
        self.mask.complement = true;
        self
    }

    pub fn structural_mask(mut self) -> Self {
        self.mask.structure = true;
        self
    }

    pub fn replace_output(mut self) -> Self {
        self.outp = Output::Replace;
        self
    }

    pub fn is_inp0_transposed(&self) -> bool {
        self.inp0 == Orientation::Transposed
    }

    pub fn is_inp1_transposed(&self) -> bool {
        self.inp1 == Orientation::Transposed
    }

    pub fn is_mask_complemented(&self) -> bool {
        self.mask.complement
    }

    pub fn is_mask_structural(&self) -> bool {
        self.mask.structure
    }

    pub fn should_replace_output(&self) -> bool {
        self.outp == Output::Replace
    }
}

/// Presets named after `GrB_DESC_*`
#[allow(non_snake_case)]
pub mod GrBDesc {
    use super::Descriptor;

    /// `GrB_DESC_T0`
    pub fn t0() -> Descriptor {
        Descriptor::new().transpose_inp0()
    }

    /// `GrB_DESC_T1`
    pub fn t1() -> Descriptor {
        Descriptor::new().transpose_inp1()
    }

    /// `GrB_DESC_C`
    pub fn c() -> Descriptor {
        Descriptor::new().complement_mask()
    }

    /// `GrB_DESC_R`
    pub fn r() -> Descriptor {
        Descriptor::new().replace_output()
    }

    /// `GrB_DESC_RC`: frontier expansion, write only unvisited positions
    /// and drop everything else
    pub fn rc() -> Descriptor {
        Descriptor::new().replace_output().complement_mask()
    }
}
