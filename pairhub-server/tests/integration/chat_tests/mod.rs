mod test_chat_history;
