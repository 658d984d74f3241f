use crate::convert::FromDbModel;
use manabi_entity::entry::Model as EntryModel;
use manabi_model::entry::Entry;

impl FromDbModel<EntryModel> for Entry {
    fn from_db_model(model: EntryModel) -> Self {
        Self {
            id: model.id,
            topic_id: model.topic_id,
            text: model.text,
            date_added: model.date_added,
        }
    }
}
