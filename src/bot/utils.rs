/// 群组中以回复的形式发送，私聊中直接发送
#[macro_export]
macro_rules! quote_in_group {
    ($req:expr, $msg:expr) => {{
        let req = $req;
        if $msg.chat.is_private() {
            req
        } else {
            req.reply_to_message_id($msg.id)
        }
    }};
}

/// 回复文本消息
#[macro_export]
macro_rules! reply_to {
    ($bot:expr, $msg:expr, $text:expr) => {
        $crate::quote_in_group!($bot.send_message($msg.chat.id, $text), $msg)
    };
}
