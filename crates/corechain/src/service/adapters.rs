pub mod genesis;
