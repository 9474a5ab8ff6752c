pub mod assets;
pub mod camera;
pub mod core;
pub mod floors;
pub mod loading;
pub mod scene;
