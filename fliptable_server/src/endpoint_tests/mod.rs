mod helpers;
mod market;
mod mocks;
