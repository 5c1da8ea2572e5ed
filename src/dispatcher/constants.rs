//! Dispatcher constants
//!
//! Fixed reply texts sent back to chat users.

/// Reply when the session gate rejects a user
pub const NOT_CONNECTED_REPLY: &str =
    "Not connected to the AI bridge. Try restarting the bot or checking the bridge status.";

/// Interim reply before a chat request
pub const PROCESSING_REPLY: &str = "Processing your request...";

/// Interim reply before a vision request
pub const ANALYZING_REPLY: &str = "Analyzing image...";

/// Interim reply before a connect handshake
pub const CONNECTING_REPLY: &str = "Connecting to bridge...";

/// Reply after a successful connect handshake
pub const CONNECTED_REPLY: &str = "Connected to AI bridge";

/// Reply to `/chat` without a message
pub const CHAT_USAGE_REPLY: &str = "Please provide a message to chat about: /chat your message here";

/// Reply to a photo event without an image
pub const MISSING_IMAGE_REPLY: &str = "Please send an image with a caption for analysis";

/// Prompt used for photos sent without a caption
pub const DEFAULT_VISION_PROMPT: &str = "Describe this image";

/// Reply to `/help`
pub const HELP_REPLY: &str = "Available commands:\n\
/start - Start the bot\n\
/help - Show this help message\n\
/connect_bridge <url> <session_id> - Connect to AI bridge\n\
/bridge_status - Check bridge connection status\n\
/chat <message> - Chat with AI\n\
/vision - Analyze images (send image with caption)";
