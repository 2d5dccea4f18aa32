pub(crate) mod non_linear;
