pub(crate) mod artwork;
pub(crate) mod generative;
pub(crate) mod luxe;
pub(crate) mod palette;
pub(crate) mod shape;
pub(crate) mod wallpaper;
