mod basic;
mod transforms;
