/// Keys that activate a control the same way a click does.
/// "Spacebar" is the key value older browsers report for the space bar.
pub const ACTIVATION_KEYS: [&str; 3] = [" ", "Spacebar", "Enter"];

pub fn is_activation_key(key: &str) -> bool {
    ACTIVATION_KEYS.contains(&key)
}
