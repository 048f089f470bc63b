mod test_room_broadcast;
