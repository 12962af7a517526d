pub mod layerbar_env;
