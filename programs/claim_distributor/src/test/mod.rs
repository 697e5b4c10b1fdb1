pub mod test_signature;
