use crate::aa::{AAFramework, Extension, LabelType};

/// Computes the image of an extension under the characteristic function of an AF.
///
/// The result contains the arguments of the framework defended by the given extension.
pub fn characteristic_function<T>(af: &AAFramework<T>, ext: &Extension) -> Extension
where
    T: LabelType,
{
    af.argument_set()
        .iter()
        .filter(|arg| ext.defends(af, arg.id()))
        .map(|arg| arg.id())
        .collect()
}

/// Computes the grounded extension of an AF.
///
/// The grounded extension is the least fixed point of the characteristic function,
/// obtained by iterating it from the empty extension.
pub fn grounded_extension<T>(af: &AAFramework<T>) -> Extension
where
    T: LabelType,
{
    let mut ext = Extension::new();
    loop {
        let next = characteristic_function(af, &ext);
        if next == ext {
            return ext;
        }
        ext = next;
    }
}
